//! Todo store: in-memory list plus persistence orchestration.
//!
//! # Responsibility
//! - Load the persisted list and keep it as the session source of truth.
//! - Apply toggle/complete/delete/add and rewrite the blob when required.
//!
//! # Invariants
//! - `mark_complete`, `delete_item` and `add_item` issue exactly one full
//!   write when they change state; `load` and `toggle_expand` never write.
//! - Mutations are applied in memory before the write. A failed write keeps
//!   the in-memory change and sets `has_unsaved_changes()` until a later
//!   write succeeds.
//! - Expand state is reset on every load.
//! - Stored blobs may repeat an id; complete and delete act on every match.

use crate::model::todo::{TodoDraft, TodoId, TodoItem, TodoValidationError, ValidationMode};
use crate::persist::codec::decode_todos;
use crate::persist::todo_persistence::{PersistError, TodoPersistence};
use crate::view::expansion::ExpansionState;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Todo store operation failure.
#[derive(Debug)]
pub enum StoreError {
    /// Creation input rejected; nothing changed.
    Validation(TodoValidationError),
    /// The in-memory change was applied but could not be persisted.
    Persistence(PersistError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Persistence(err) => write!(f, "failed to save todos: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Persistence(err) => Some(err),
        }
    }
}

impl From<TodoValidationError> for StoreError {
    fn from(value: TodoValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<PersistError> for StoreError {
    fn from(value: PersistError) -> Self {
        Self::Persistence(value)
    }
}

/// Session todo list backed by a persistence adapter.
pub struct TodoStore<P: TodoPersistence> {
    persistence: P,
    mode: ValidationMode,
    items: Vec<TodoItem>,
    expansion: ExpansionState,
    unsaved: bool,
}

impl<P: TodoPersistence> TodoStore<P> {
    /// Creates an empty store. Call `load` to pull persisted todos.
    pub fn new(persistence: P, mode: ValidationMode) -> Self {
        Self {
            persistence,
            mode,
            items: Vec::new(),
            expansion: ExpansionState::new(),
            unsaved: false,
        }
    }

    /// Replaces the in-memory list with the persisted one.
    ///
    /// Absent, unreadable or malformed blobs load as an empty list. Returns
    /// the number of loaded todos.
    pub fn load(&mut self) -> usize {
        self.items = match self.persistence.read() {
            Ok(Some(blob)) => match decode_todos(&blob) {
                Ok(items) => items,
                Err(err) => {
                    warn!(
                        "event=todo_load module=store status=malformed bytes={} error={}",
                        blob.len(),
                        err
                    );
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("event=todo_load module=store status=read_failed error={err}");
                Vec::new()
            }
        };
        self.expansion.clear();
        self.unsaved = false;

        info!(
            "event=todo_load module=store status=ok count={}",
            self.items.len()
        );
        self.items.len()
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expansion.is_expanded(id)
    }

    /// Whether the last write failed and memory is ahead of storage.
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Flips expand state for `id`. Returns the new state, or `None` when no
    /// todo matches. Never writes.
    pub fn toggle_expand(&mut self, id: &str) -> Option<bool> {
        self.get(id)?;
        Some(self.expansion.toggle(id))
    }

    /// Marks every todo with `id` finished and collapses it, then rewrites
    /// the blob.
    ///
    /// Returns `Ok(false)` without writing when no todo matches.
    pub fn mark_complete(&mut self, id: &str) -> StoreResult<bool> {
        let mut matched = false;
        for item in self.items.iter_mut().filter(|item| item.id == id) {
            item.complete();
            matched = true;
        }
        if !matched {
            return Ok(false);
        }
        self.expansion.collapse(id);
        self.persist("complete")?;
        Ok(true)
    }

    /// Removes every todo with `id`, then rewrites the blob.
    ///
    /// Returns `Ok(false)` without writing when no todo matches.
    pub fn delete_item(&mut self, id: &str) -> StoreResult<bool> {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            return Ok(false);
        }
        self.expansion.collapse(id);
        self.persist("delete")?;
        Ok(true)
    }

    /// Validates input, prepends a new unfinished todo, then rewrites the blob.
    ///
    /// # Errors
    /// - `Validation` when input is rejected; store and blob are unchanged.
    /// - `Persistence` when the write fails; the todo stays in memory.
    pub fn add_item(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> StoreResult<TodoId> {
        let draft = TodoDraft::new(title, description);
        if let Err(err) = draft.validate(self.mode) {
            info!("event=todo_add module=store status=rejected reason={err}");
            return Err(err.into());
        }

        let item = draft.into_item();
        let id = item.id.clone();
        self.items.insert(0, item);
        self.persist("add")?;
        Ok(id)
    }

    /// Rewrites the full list, e.g. to retry after a failed write.
    pub fn flush(&mut self) -> StoreResult<()> {
        self.persist("flush")
    }

    fn persist(&mut self, op: &str) -> StoreResult<()> {
        match self.persistence.write(&self.items) {
            Ok(()) => {
                self.unsaved = false;
                info!(
                    "event=todo_{op} module=store status=ok count={}",
                    self.items.len()
                );
                Ok(())
            }
            Err(err) => {
                self.unsaved = true;
                warn!("event=todo_{op} module=store status=unsaved error={err}");
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TodoStore;
    use crate::model::todo::ValidationMode;
    use crate::persist::todo_persistence::KeyValueTodoPersistence;
    use crate::storage::memory::MemoryKeyValueStore;

    fn empty_store() -> TodoStore<KeyValueTodoPersistence<MemoryKeyValueStore>> {
        TodoStore::new(
            KeyValueTodoPersistence::new(MemoryKeyValueStore::new()),
            ValidationMode::Strict,
        )
    }

    #[test]
    fn toggle_on_unknown_id_returns_none() {
        let mut store = empty_store();
        assert_eq!(store.toggle_expand("missing"), None);
    }

    #[test]
    fn delete_collapses_removed_row() {
        let mut store = empty_store();
        let id = store.add_item("title", "body").unwrap();
        store.toggle_expand(&id);
        assert!(store.delete_item(&id).unwrap());
        assert!(!store.is_expanded(&id));
    }
}
