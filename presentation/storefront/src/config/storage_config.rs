use std::env;
use std::path::PathBuf;

const DEFAULT_PATH: &str = ".feira/local_storage.json";

/// Location of the local storage file.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub path: PathBuf,
}

impl StorageConfig {
    /// Environment variables:
    /// - LOCAL_STORAGE_PATH: JSON file holding the session credential and
    ///   saved client info (default: ".feira/local_storage.json")
    pub fn from_env() -> Self {
        let path = env::var("LOCAL_STORAGE_PATH")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PATH.to_string());

        Self {
            path: PathBuf::from(path),
        }
    }
}
