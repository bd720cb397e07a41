use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::ProducerRegistration;

#[async_trait]
pub trait RegisterProducerUseCase: Send + Sync {
    async fn execute(&self, registration: ProducerRegistration) -> Result<(), AuthError>;
}
