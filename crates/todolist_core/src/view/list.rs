//! List screen projection.
//!
//! # Responsibility
//! - Map the store into one row per todo, in store order.
//! - Route row taps to the matching store operation.
//!
//! # Invariants
//! - Description and actions are only exposed for expanded rows.
//! - `Complete` is never offered for a finished todo; `Delete` always is.
//! - Tapping an action never toggles expand state (completion collapses).

use crate::model::todo::TodoId;
use crate::persist::todo_persistence::TodoPersistence;
use crate::store::todo_store::{StoreResult, TodoStore};

/// Title rendered above the list.
pub const LIST_TITLE: &str = "My Todo List";

/// Action control shown on an expanded row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Complete,
    Delete,
}

/// One rendered list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    pub id: TodoId,
    pub text: String,
    /// Render the title with the finished style.
    pub finished: bool,
    pub expanded: bool,
    pub description: Option<String>,
    pub actions: Vec<RowAction>,
}

impl TodoRow {
    /// Expand indicator icon name.
    pub fn indicator(&self) -> &'static str {
        if self.expanded {
            "caret-up"
        } else {
            "caret-down"
        }
    }
}

/// Rendered list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub title: &'static str,
    pub rows: Vec<TodoRow>,
}

impl ListView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// User interaction on a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowEvent {
    /// Tap on the row body, outside the action icons.
    BodyTapped,
    CompleteTapped,
    DeleteTapped,
}

/// Builds the list screen from current store state.
pub fn render_list<P: TodoPersistence>(store: &TodoStore<P>) -> ListView {
    let rows = store
        .items()
        .iter()
        .map(|item| {
            let expanded = store.is_expanded(&item.id);
            let (description, actions) = if expanded {
                let mut actions = Vec::with_capacity(2);
                if !item.finished {
                    actions.push(RowAction::Complete);
                }
                actions.push(RowAction::Delete);
                (Some(item.description.clone()), actions)
            } else {
                (None, Vec::new())
            };

            TodoRow {
                id: item.id.clone(),
                text: item.text.clone(),
                finished: item.finished,
                expanded,
                description,
                actions,
            }
        })
        .collect();

    ListView {
        title: LIST_TITLE,
        rows,
    }
}

/// Applies a row tap to the store.
///
/// Returns whether anything changed. Taps on unknown ids are no-ops.
pub fn dispatch_row_event<P: TodoPersistence>(
    store: &mut TodoStore<P>,
    id: &str,
    event: RowEvent,
) -> StoreResult<bool> {
    match event {
        RowEvent::BodyTapped => Ok(store.toggle_expand(id).is_some()),
        RowEvent::CompleteTapped => {
            // A finished row does not offer the action; treat stale taps as no-ops.
            if store.get(id).is_some_and(|item| item.finished) {
                return Ok(false);
            }
            store.mark_complete(id)
        }
        RowEvent::DeleteTapped => store.delete_item(id),
    }
}

#[cfg(test)]
mod tests {
    use super::{render_list, RowAction, LIST_TITLE};
    use crate::model::todo::ValidationMode;
    use crate::persist::todo_persistence::KeyValueTodoPersistence;
    use crate::storage::memory::MemoryKeyValueStore;
    use crate::store::todo_store::TodoStore;

    #[test]
    fn collapsed_rows_hide_description_and_actions() {
        let mut store = TodoStore::new(
            KeyValueTodoPersistence::new(MemoryKeyValueStore::new()),
            ValidationMode::Strict,
        );
        store.add_item("Buy milk", "2%").unwrap();

        let view = render_list(&store);
        assert_eq!(view.title, LIST_TITLE);
        assert_eq!(view.rows.len(), 1);
        let row = &view.rows[0];
        assert!(!row.expanded);
        assert_eq!(row.indicator(), "caret-down");
        assert_eq!(row.description, None);
        assert!(row.actions.is_empty());

        store.toggle_expand(&row.id);
        let row = render_list(&store).rows.remove(0);
        assert_eq!(row.indicator(), "caret-up");
        assert_eq!(row.description.as_deref(), Some("2%"));
        assert_eq!(row.actions, vec![RowAction::Complete, RowAction::Delete]);
    }
}
