use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::client_info_store::ClientInfoStore;
use crate::domain::rating::errors::RatingError;
use crate::domain::rating::gateway::RatingGateway;
use crate::domain::rating::model::{NewRating, Score};
use crate::domain::rating::use_cases::submit::{SubmitRatingParams, SubmitRatingUseCase};

pub struct SubmitRatingUseCaseImpl {
    pub gateway: Arc<dyn RatingGateway>,
    pub client_info: Arc<dyn ClientInfoStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SubmitRatingUseCase for SubmitRatingUseCaseImpl {
    async fn execute(&self, params: SubmitRatingParams) -> Result<(), RatingError> {
        let score = Score::new(params.score)?;

        // The backend checks the rating against the phone the order was placed with.
        let client = self
            .client_info
            .load()
            .filter(|info| !info.phone.is_empty())
            .ok_or(RatingError::ClientInfoMissing)?;

        let rating = NewRating {
            order_id: params.order_id,
            client_name: client.name,
            client_phone: client.phone,
            score,
            comment: params.comment.unwrap_or_default(),
        };

        self.gateway.submit(&rating).await?;
        self.logger.info(&format!(
            "Order {} rated with {} stars",
            rating.order_id,
            score.value()
        ));
        Ok(())
    }
}
