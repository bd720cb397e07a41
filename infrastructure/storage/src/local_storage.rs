use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use business::domain::errors::StorageError;
use business::domain::logger::Logger;

/// String key/value store persisted as one JSON object on disk.
///
/// Every write rewrites the whole file. Without a path the store lives in memory only.
pub struct LocalStorage {
    path: Option<PathBuf>,
    entries: RwLock<BTreeMap<String, String>>,
    pub(crate) logger: Arc<dyn Logger>,
}

impl LocalStorage {
    /// Loads `path` if it exists. A file that is not a JSON object of strings
    /// is discarded and replaced on the next write.
    pub fn open(path: impl Into<PathBuf>, logger: Arc<dyn Logger>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|_| {
                logger.warn(&format!(
                    "Discarding unreadable local storage at {}",
                    path.display()
                ));
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };

        Self {
            path: Some(path),
            entries: RwLock::new(entries),
            logger,
        }
    }

    pub fn in_memory(logger: Arc<dyn Logger>) -> Self {
        Self {
            path: None,
            entries: RwLock::new(BTreeMap::new()),
            logger,
        }
    }

    pub fn get_item(&self, key: &str) -> Option<String> {
        self.read().get(key).cloned()
    }

    pub fn set_item(&self, key: &str, value: impl Into<String>) -> Result<(), StorageError> {
        let value = value.into();
        self.update(|entries| {
            entries.insert(key.to_string(), value);
        })
    }

    pub fn remove_items(&self, keys: &[&str]) -> Result<(), StorageError> {
        self.update(|entries| {
            for key in keys {
                entries.remove(*key);
            }
        })
    }

    /// Applies `change` to a copy of the entries and saves it. The in-memory map
    /// is only replaced once the file is written, so a failed write leaves both untouched.
    pub fn update(
        &self,
        change: impl FnOnce(&mut BTreeMap<String, String>),
    ) -> Result<(), StorageError> {
        let mut entries = self.write();
        let mut next = entries.clone();
        change(&mut next);
        if next == *entries {
            return Ok(());
        }
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.write_failed(path, e))?;
        }
        let content = serde_json::to_string_pretty(entries).map_err(|_| StorageError::Corrupted)?;
        fs::write(path, content).map_err(|e| self.write_failed(path, e))
    }

    fn write_failed(&self, path: &Path, error: std::io::Error) -> StorageError {
        self.logger.error(&format!(
            "Could not write local storage at {}: {}",
            path.display(),
            error
        ));
        StorageError::WriteFailed
    }

    // Entries are plain strings, a poisoned lock still holds a usable map.
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, String>> {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, String>> {
        self.entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::PathBuf;
    use std::sync::Arc;

    use business::domain::logger::Logger;

    pub struct SilentLogger;

    impl Logger for SilentLogger {
        fn info(&self, _message: &str) {}
        fn warn(&self, _message: &str) {}
        fn error(&self, _message: &str) {}
        fn debug(&self, _message: &str) {}
    }

    pub fn silent() -> Arc<dyn Logger> {
        Arc::new(SilentLogger)
    }

    pub fn temp_file() -> PathBuf {
        std::env::temp_dir()
            .join(format!("feira-{}", uuid::Uuid::new_v4()))
            .join("local_storage.json")
    }
}
