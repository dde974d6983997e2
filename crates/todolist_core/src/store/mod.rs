//! In-memory todo store.
//!
//! # Responsibility
//! - Own the authoritative todo sequence for the running session.
//! - Route persisting mutations through the persistence adapter.
//!
//! # Invariants
//! - Newest todos come first.
//! - Operations on unknown ids are no-ops, never errors.

pub mod todo_store;
