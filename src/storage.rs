//! Durable key-value slot behind the session flag

use gloo_storage::{LocalStorage, Storage};
use parking_lot::Mutex;
use std::collections::HashMap;

use crate::error::{AppError, Result};

/// Raw string storage. Reads of a missing key return `None`.
pub trait FlagStorage: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
    fn clear(&self, key: &str);
}

/// `window.localStorage`.
///
/// Values go through the raw `Storage` handle rather than gloo's JSON layer so
/// the stored flag is the literal string `true`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl FlagStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| AppError::Storage(format!("failed to write {key}: {e:?}")))
    }

    fn clear(&self, key: &str) {
        let _ = LocalStorage::raw().remove_item(key);
    }
}

/// In-memory storage for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlagStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) {
        self.entries.lock().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_read_write_clear() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read("k"), None);

        storage.write("k", "true").expect("should write");
        assert_eq!(storage.read("k").as_deref(), Some("true"));

        storage.clear("k");
        assert_eq!(storage.read("k"), None);
    }

    #[test]
    fn test_clear_missing_key_is_noop() {
        let storage = MemoryStorage::new();
        storage.clear("absent");
        assert_eq!(storage.read("absent"), None);
    }
}
