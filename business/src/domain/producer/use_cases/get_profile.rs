use async_trait::async_trait;

use crate::domain::producer::errors::ProducerError;
use crate::domain::producer::model::ProducerProfile;

#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self) -> Result<ProducerProfile, ProducerError>;
}
