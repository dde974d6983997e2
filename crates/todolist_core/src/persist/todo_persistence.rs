//! Todo persistence contract and key-value implementation.
//!
//! # Responsibility
//! - Read the raw todo blob, reporting absence explicitly.
//! - Rewrite the full list on every persisting mutation.
//!
//! # Invariants
//! - `write` encodes before touching storage, so an encode failure leaves the
//!   previous blob intact.

use crate::config::DEFAULT_STORAGE_KEY;
use crate::model::todo::TodoItem;
use crate::persist::codec::{encode_todos, CodecError};
use crate::storage::kv_store::{KeyValueStore, StorageError};
use log::{debug, error};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type PersistResult<T> = Result<T, PersistError>;

/// Persistence adapter failure.
#[derive(Debug)]
pub enum PersistError {
    Codec(CodecError),
    Storage(StorageError),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Codec(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Codec(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<CodecError> for PersistError {
    fn from(value: CodecError) -> Self {
        Self::Codec(value)
    }
}

impl From<StorageError> for PersistError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Durable storage of the whole todo list as one blob.
pub trait TodoPersistence {
    /// Returns the stored blob, or `None` when it was never written.
    fn read(&self) -> PersistResult<Option<String>>;
    /// Serializes and stores the full list, replacing any prior blob.
    fn write(&self, items: &[TodoItem]) -> PersistResult<()>;
}

/// Persistence adapter writing one blob into a key-value store.
pub struct KeyValueTodoPersistence<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> KeyValueTodoPersistence<S> {
    /// Uses the default `todos` key.
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Underlying key-value store, for inspection.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: KeyValueStore> TodoPersistence for KeyValueTodoPersistence<S> {
    fn read(&self) -> PersistResult<Option<String>> {
        Ok(self.store.get(&self.key)?)
    }

    fn write(&self, items: &[TodoItem]) -> PersistResult<()> {
        let started_at = Instant::now();
        let blob = encode_todos(items)?;
        match self.store.set(&self.key, &blob) {
            Ok(()) => {
                debug!(
                    "event=todo_write module=persist status=ok count={} bytes={} duration_ms={}",
                    items.len(),
                    blob.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=todo_write module=persist status=error count={} duration_ms={} error={}",
                    items.len(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyValueTodoPersistence, TodoPersistence};
    use crate::model::todo::TodoItem;
    use crate::persist::codec::decode_todos;
    use crate::storage::memory::MemoryKeyValueStore;

    #[test]
    fn read_before_any_write_is_absent() {
        let persistence = KeyValueTodoPersistence::new(MemoryKeyValueStore::new());
        assert_eq!(persistence.read().unwrap(), None);
    }

    #[test]
    fn write_then_read_returns_full_list() {
        let persistence = KeyValueTodoPersistence::with_key(MemoryKeyValueStore::new(), "slot");
        let items = vec![
            TodoItem::with_id("2", "B", "second"),
            TodoItem::with_id("1", "A", "first"),
        ];
        persistence.write(&items).unwrap();

        let blob = persistence.read().unwrap().unwrap();
        assert_eq!(decode_todos(&blob).unwrap(), items);
        assert_eq!(persistence.key(), "slot");
    }
}
