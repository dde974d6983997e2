//! Add-todo input flow.
//!
//! # Responsibility
//! - Hold title/description input until the user confirms or cancels.
//! - Hand confirmed input to the shared store.
//!
//! # Invariants
//! - Cancel never touches the store.
//! - A validation failure keeps the inputs so the user can fix them.
//! - Once the todo reaches the store the inputs are cleared, even if the
//!   write failed, so a retry cannot add it twice.

use crate::model::todo::{TodoDraft, TodoId};
use crate::persist::todo_persistence::TodoPersistence;
use crate::store::todo_store::{StoreError, StoreResult, TodoStore};

/// Message shown after a todo was created and saved.
pub const SUCCESS_NOTICE: &str = "Todo Added Successfully";

/// Result of a confirmed creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationOutcome {
    pub id: TodoId,
    pub notice: &'static str,
}

/// Input state of the add screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreationFlow {
    draft: TodoDraft,
}

impl CreationFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    pub fn title(&self) -> &str {
        &self.draft.title
    }

    pub fn description(&self) -> &str {
        &self.draft.description
    }

    pub fn is_blank(&self) -> bool {
        self.draft.title.is_empty() && self.draft.description.is_empty()
    }

    /// Submits the current input to `store`.
    pub fn confirm<P: TodoPersistence>(
        &mut self,
        store: &mut TodoStore<P>,
    ) -> StoreResult<CreationOutcome> {
        let result = store.add_item(self.draft.title.clone(), self.draft.description.clone());
        match result {
            Ok(id) => {
                self.clear();
                Ok(CreationOutcome {
                    id,
                    notice: SUCCESS_NOTICE,
                })
            }
            Err(StoreError::Persistence(err)) => {
                self.clear();
                Err(StoreError::Persistence(err))
            }
            Err(err) => Err(err),
        }
    }

    /// Discards input.
    pub fn cancel(&mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        self.draft = TodoDraft::default();
    }
}
