//! In-memory key-value store.
//!
//! Substitutable stand-in for on-device storage in tests and previews.

use super::kv_store::{checked_key, KeyValueStore, StorageError, StorageResult};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.lock().map_or(0, |entries| entries.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> StorageResult<MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Backend("memory store lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let key = checked_key(key)?;
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let key = checked_key(key)?;
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let key = checked_key(key)?;
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryKeyValueStore;
    use crate::storage::kv_store::KeyValueStore;

    #[test]
    fn absent_key_reads_as_none() {
        let store = MemoryKeyValueStore::new();
        assert_eq!(store.get("todos").unwrap(), None);
    }

    #[test]
    fn remove_clears_value() {
        let store = MemoryKeyValueStore::new();
        store.set("todos", "[]").unwrap();
        store.remove("todos").unwrap();
        store.remove("todos").unwrap();
        assert!(store.is_empty());
    }
}
