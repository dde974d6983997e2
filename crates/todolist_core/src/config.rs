//! Storage configuration.
//!
//! # Responsibility
//! - Resolve where the todo database lives and which key holds the blob.
//!
//! # Invariants
//! - A blank `TODOLIST_DB_PATH` is treated as unset.

use std::path::{Path, PathBuf};

/// Storage key holding the serialized todo list.
pub const DEFAULT_STORAGE_KEY: &str = "todos";
/// Environment variable overriding the database file location.
pub const DB_PATH_ENV: &str = "TODOLIST_DB_PATH";

const DEFAULT_DB_FILE_NAME: &str = "todolist.sqlite3";

/// Where and under which key todos are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub db_path: PathBuf,
    pub storage_key: String,
}

impl StorageConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    /// Resolves the database path from `TODOLIST_DB_PATH`, falling back to
    /// a file in the system temp directory.
    pub fn from_env() -> Self {
        Self::new(resolve_db_path(std::env::var(DB_PATH_ENV).ok().as_deref()))
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}

fn resolve_db_path(raw: Option<&str>) -> PathBuf {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::{resolve_db_path, StorageConfig, DEFAULT_STORAGE_KEY};
    use std::path::PathBuf;

    #[test]
    fn blank_override_falls_back_to_temp_dir() {
        let path = resolve_db_path(Some("   "));
        assert_eq!(path, std::env::temp_dir().join("todolist.sqlite3"));
        assert_eq!(resolve_db_path(None), path);
    }

    #[test]
    fn override_is_trimmed() {
        assert_eq!(
            resolve_db_path(Some(" /data/todos.db ")),
            PathBuf::from("/data/todos.db")
        );
    }

    #[test]
    fn default_key_is_todos() {
        let config = StorageConfig::new("/tmp/x.db");
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.with_storage_key("other").storage_key, "other");
    }
}
