use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::NewRating;

#[async_trait]
pub trait RatingGateway: Send + Sync {
    async fn submit(&self, rating: &NewRating) -> Result<(), GatewayError>;
}
