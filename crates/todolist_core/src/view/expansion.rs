//! Per-row expand/collapse state.
//!
//! Kept apart from `TodoItem` so view-only flags can never be persisted.

use crate::model::todo::TodoId;
use std::collections::HashSet;

/// Set of currently expanded todo ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashSet<TodoId>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Flips the state for `id` and returns the new value.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.to_string());
            true
        }
    }

    pub fn collapse(&mut self, id: &str) {
        self.expanded.remove(id);
    }

    pub fn clear(&mut self) {
        self.expanded.clear();
    }
}
