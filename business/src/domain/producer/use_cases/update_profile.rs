use async_trait::async_trait;

use crate::domain::producer::errors::ProducerError;
use crate::domain::producer::model::{ProducerProfile, ProfileUpdate};

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(&self, update: ProfileUpdate) -> Result<ProducerProfile, ProducerError>;
}
