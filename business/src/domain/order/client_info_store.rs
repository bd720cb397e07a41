use crate::domain::errors::StorageError;

use super::model::ClientInfo;

/// Locally remembered consumer contact details.
pub trait ClientInfoStore: Send + Sync {
    fn load(&self) -> Option<ClientInfo>;
    fn save(&self, info: &ClientInfo) -> Result<(), StorageError>;
}
