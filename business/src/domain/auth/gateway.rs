use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::{IssuedTokens, LoginCredentials, ProducerRegistration};

#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, credentials: &LoginCredentials) -> Result<IssuedTokens, GatewayError>;
    async fn register(&self, registration: &ProducerRegistration) -> Result<(), GatewayError>;
}
