//! Core logic for the todo list app.
//! This crate is the single source of truth for todo invariants; UI shells
//! reach it through `todolist_ffi`.

pub mod config;
pub mod db;
pub mod flow;
pub mod logging;
pub mod model;
pub mod persist;
pub mod storage;
pub mod store;
pub mod view;

pub use config::{StorageConfig, DEFAULT_STORAGE_KEY};
pub use flow::creation::{CreationFlow, CreationOutcome, SUCCESS_NOTICE};
pub use flow::navigation::{Navigator, Route};
pub use flow::session::TodoSession;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{TodoDraft, TodoId, TodoItem, TodoValidationError, ValidationMode};
pub use persist::codec::{decode_todos, encode_todos, CodecError};
pub use persist::todo_persistence::{
    KeyValueTodoPersistence, PersistError, PersistResult, TodoPersistence,
};
pub use storage::kv_store::{KeyValueStore, SqliteKeyValueStore, StorageError, StorageResult};
pub use storage::memory::MemoryKeyValueStore;
pub use store::todo_store::{StoreError, StoreResult, TodoStore};
pub use view::list::{render_list, ListView, RowAction, RowEvent, TodoRow};

/// Todo session backed by on-device SQLite storage.
pub type SqliteTodoSession = TodoSession<KeyValueTodoPersistence<SqliteKeyValueStore>>;

/// Opens the configured database and loads a session from it.
pub fn open_sqlite_session(
    config: &StorageConfig,
    mode: ValidationMode,
) -> StorageResult<SqliteTodoSession> {
    let store = SqliteKeyValueStore::open(config.db_path())?;
    let persistence = KeyValueTodoPersistence::with_key(store, config.storage_key.clone());
    Ok(TodoSession::open(persistence, mode))
}

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
