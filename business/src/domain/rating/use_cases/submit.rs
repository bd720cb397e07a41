use async_trait::async_trait;

use crate::domain::rating::errors::RatingError;
use crate::domain::shared::value_objects::OrderId;

pub struct SubmitRatingParams {
    pub order_id: OrderId,
    pub score: u8,
    pub comment: Option<String>,
}

#[async_trait]
pub trait SubmitRatingUseCase: Send + Sync {
    async fn execute(&self, params: SubmitRatingParams) -> Result<(), RatingError>;
}
