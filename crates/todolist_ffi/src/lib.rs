//! Flutter-facing bindings for `todolist_core`.

pub mod api;
