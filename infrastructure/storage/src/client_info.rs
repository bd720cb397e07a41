use business::domain::errors::StorageError;
use business::domain::order::client_info_store::ClientInfoStore;
use business::domain::order::model::ClientInfo;

use crate::local_storage::LocalStorage;

pub const CLIENT_INFO_KEY: &str = "clientInfo";

impl ClientInfoStore for LocalStorage {
    fn load(&self) -> Option<ClientInfo> {
        let raw = self.get_item(CLIENT_INFO_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(info) => Some(info),
            Err(e) => {
                self.logger
                    .warn(&format!("Ignoring unreadable saved client info: {e}"));
                None
            }
        }
    }

    fn save(&self, info: &ClientInfo) -> Result<(), StorageError> {
        let raw = serde_json::to_string(info).map_err(|_| StorageError::Corrupted)?;
        self.set_item(CLIENT_INFO_KEY, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local_storage::test_support::silent;

    #[test]
    fn should_round_trip_client_info() {
        let storage = LocalStorage::in_memory(silent());
        let info = ClientInfo::new("Maria", "34999990000", "maria@mail.com");

        storage.save(&info).unwrap();

        assert_eq!(storage.load(), Some(info));
    }

    #[test]
    fn should_store_client_info_as_json_text() {
        let storage = LocalStorage::in_memory(silent());
        storage
            .save(&ClientInfo::new("Maria", "34999990000", ""))
            .unwrap();

        let raw = storage.get_item(CLIENT_INFO_KEY).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(value["phone"], "34999990000");
        assert_eq!(value["email"], "");
    }

    #[test]
    fn should_fill_missing_fields_with_defaults() {
        let storage = LocalStorage::in_memory(silent());
        storage
            .set_item(CLIENT_INFO_KEY, r#"{"name":"João","phone":"3433330000"}"#)
            .unwrap();

        let info = storage.load().unwrap();

        assert_eq!(info.name, "João");
        assert_eq!(info.email, "");
    }

    #[test]
    fn should_ignore_unreadable_client_info() {
        let storage = LocalStorage::in_memory(silent());
        storage.set_item(CLIENT_INFO_KEY, "{broken").unwrap();

        assert_eq!(storage.load(), None);
    }
}
