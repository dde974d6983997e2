//! Key-value store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide `get`/`set`/`remove` over single string slots.
//! - Keep SQL details inside the storage boundary.
//!
//! # Invariants
//! - Every write is one statement, so SQLite commits it atomically.
//! - Blank keys are rejected before touching SQL.
//! - `updated_at` is unix epoch milliseconds at millisecond precision.

use crate::db::{open_db, open_db_in_memory, DbError};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure raised by a key-value store implementation.
#[derive(Debug)]
pub enum StorageError {
    InvalidKey(String),
    Db(DbError),
    /// Backend-specific failure without a richer source.
    Backend(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidKey(key) => write!(f, "invalid storage key: `{key}`"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Backend(message) => write!(f, "storage backend failure: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidKey(_) | Self::Backend(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// String key-value storage with whole-value overwrite semantics.
pub trait KeyValueStore {
    /// Returns the stored value, or `None` when the key was never written.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    /// Stores `value` under `key`, replacing any prior value.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
    /// Removes `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// SQLite-backed key-value store owning its connection.
pub struct SqliteKeyValueStore {
    conn: Connection,
}

impl SqliteKeyValueStore {
    /// Wraps an already migrated connection.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Opens (and migrates) the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        Ok(Self::new(open_db(path)?))
    }

    /// Opens a fresh in-memory database.
    pub fn open_in_memory() -> StorageResult<Self> {
        Ok(Self::new(open_db_in_memory()?))
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let key = checked_key(key)?;
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let key = checked_key(key)?;
        self.conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at)
             VALUES (?1, ?2, CAST((julianday('now') - 2440587.5) * 86400000.0 AS INTEGER))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let key = checked_key(key)?;
        self.conn
            .execute("DELETE FROM kv_entries WHERE key = ?1;", [key])?;
        Ok(())
    }
}

/// Rejects blank keys; returns the key unchanged otherwise.
pub(crate) fn checked_key(key: &str) -> StorageResult<&str> {
    if key.trim().is_empty() {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(key)
}
