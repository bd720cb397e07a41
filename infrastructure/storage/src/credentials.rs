use business::domain::auth::credential_store::CredentialStore;
use business::domain::auth::model::AuthTokens;
use business::domain::errors::StorageError;

use crate::local_storage::LocalStorage;

pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

impl CredentialStore for LocalStorage {
    fn access_token(&self) -> Option<String> {
        self.get_item(AUTH_TOKEN_KEY).filter(|token| !token.is_empty())
    }

    fn store(&self, tokens: &AuthTokens) -> Result<(), StorageError> {
        self.update(|entries| {
            entries.insert(AUTH_TOKEN_KEY.to_string(), tokens.access.clone());
            match &tokens.refresh {
                Some(refresh) => entries.insert(REFRESH_TOKEN_KEY.to_string(), refresh.clone()),
                None => entries.remove(REFRESH_TOKEN_KEY),
            };
        })
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.remove_items(&[AUTH_TOKEN_KEY, REFRESH_TOKEN_KEY])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local_storage::test_support::{silent, temp_file};
    use std::fs;

    #[test]
    fn should_store_and_read_access_token() {
        let storage = LocalStorage::in_memory(silent());

        storage
            .store(&AuthTokens {
                access: "jwt".to_string(),
                refresh: Some("refresh".to_string()),
            })
            .unwrap();

        assert_eq!(storage.access_token().as_deref(), Some("jwt"));
        assert_eq!(storage.get_item(REFRESH_TOKEN_KEY).as_deref(), Some("refresh"));
    }

    #[test]
    fn should_drop_stale_refresh_token_when_none_issued() {
        let storage = LocalStorage::in_memory(silent());
        storage.set_item(REFRESH_TOKEN_KEY, "old").unwrap();

        storage
            .store(&AuthTokens {
                access: "drf-key".to_string(),
                refresh: None,
            })
            .unwrap();

        assert_eq!(storage.get_item(REFRESH_TOKEN_KEY), None);
    }

    #[test]
    fn should_clear_both_tokens() {
        let storage = LocalStorage::in_memory(silent());
        storage
            .store(&AuthTokens {
                access: "jwt".to_string(),
                refresh: Some("refresh".to_string()),
            })
            .unwrap();

        storage.clear().unwrap();

        assert_eq!(storage.access_token(), None);
        assert_eq!(storage.get_item(REFRESH_TOKEN_KEY), None);
    }

    #[test]
    fn should_treat_empty_token_as_absent() {
        let storage = LocalStorage::in_memory(silent());
        storage.set_item(AUTH_TOKEN_KEY, "").unwrap();

        assert_eq!(storage.access_token(), None);
    }

    #[test]
    fn should_not_keep_token_when_saving_fails() {
        let blocker = temp_file();
        fs::create_dir_all(blocker.parent().unwrap()).unwrap();
        fs::write(&blocker, "{}").unwrap();
        let storage = LocalStorage::open(blocker.join("nested.json"), silent());

        let result = storage.store(&AuthTokens {
            access: "jwt".to_string(),
            refresh: Some("refresh".to_string()),
        });

        assert_eq!(result, Err(StorageError::WriteFailed));
        assert_eq!(storage.access_token(), None);
        assert_eq!(storage.get_item(REFRESH_TOKEN_KEY), None);
        let _ = fs::remove_dir_all(blocker.parent().unwrap());
    }
}
