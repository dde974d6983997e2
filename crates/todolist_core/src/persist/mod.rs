//! Persistence adapter for the todo list.
//!
//! # Responsibility
//! - Serialize the whole todo list into one blob under one storage key.
//! - Hide the key-value backend behind a `read`/`write` contract.
//!
//! # Invariants
//! - Every write replaces the full list; there are no partial updates.
//! - View-only state never reaches the blob.

pub mod codec;
pub mod todo_persistence;
