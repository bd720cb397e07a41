use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;

#[async_trait]
pub trait LogoutUseCase: Send + Sync {
    async fn execute(&self) -> Result<(), AuthError>;
}
