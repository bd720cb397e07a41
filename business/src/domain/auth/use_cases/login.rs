use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::LoginCredentials;

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, credentials: LoginCredentials) -> Result<(), AuthError>;
}
