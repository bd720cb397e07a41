use crate::domain::errors::StorageError;

use super::model::AuthTokens;

/// Where the session credential lives between requests.
pub trait CredentialStore: Send + Sync {
    fn access_token(&self) -> Option<String>;
    fn store(&self, tokens: &AuthTokens) -> Result<(), StorageError>;
    /// Drops both the access and the refresh token.
    fn clear(&self) -> Result<(), StorageError>;
}
