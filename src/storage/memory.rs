//! In-memory storage backend.

use std::sync::{Mutex, PoisonError};

use rustc_hash::FxHashMap;

use super::{StorageError, StoragePort};

/// Volatile storage backend for tests and demos.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<FxHashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoragePort for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        entries.insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        entries.remove(key);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn load_missing_key_returns_none() -> TestResult {
        let storage = MemoryStorage::new();

        assert_eq!(storage.load("cart")?, None);

        Ok(())
    }

    #[test]
    fn save_then_load_round_trips() -> TestResult {
        let storage = MemoryStorage::new();

        storage.save("cart", "{\"lines\":[]}")?;

        assert_eq!(storage.load("cart")?.as_deref(), Some("{\"lines\":[]}"));

        Ok(())
    }

    #[test]
    fn save_replaces_previous_value() -> TestResult {
        let storage = MemoryStorage::new();

        storage.save("cart", "first")?;
        storage.save("cart", "second")?;

        assert_eq!(storage.load("cart")?.as_deref(), Some("second"));

        Ok(())
    }

    #[test]
    fn remove_is_a_noop_for_missing_keys() -> TestResult {
        let storage = MemoryStorage::new();

        storage.remove("orders")?;

        storage.save("orders", "[]")?;
        storage.remove("orders")?;

        assert_eq!(storage.load("orders")?, None);

        Ok(())
    }
}
