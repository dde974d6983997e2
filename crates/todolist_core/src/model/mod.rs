//! Todo domain model.
//!
//! # Responsibility
//! - Define the persisted record and creation input shapes.
//!
//! # Invariants
//! - Persisted data never carries view-only state.

pub mod todo;
