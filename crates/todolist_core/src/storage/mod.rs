//! On-device key-value storage.
//!
//! # Responsibility
//! - Define the string key-value contract the persistence adapter writes to.
//! - Provide SQLite-backed and in-memory implementations.
//!
//! # Invariants
//! - A `set` either fully replaces the stored value or leaves it untouched.
//! - Keys must be non-blank.

pub mod kv_store;
pub mod memory;
