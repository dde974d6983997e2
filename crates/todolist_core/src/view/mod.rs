//! View-side state and projections.
//!
//! # Responsibility
//! - Hold transient UI state keyed by todo id.
//! - Project the store into renderable list rows.
//!
//! # Invariants
//! - Nothing in this module is serialized.

pub mod expansion;
pub mod list;
