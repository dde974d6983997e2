//! Screen flows: navigation, todo creation and the shared session.
//!
//! # Responsibility
//! - Model the `list` and `add` destinations without a UI toolkit.
//! - Give both screens one shared store object instead of passing setters
//!   through navigation parameters.

pub mod creation;
pub mod navigation;
pub mod session;
