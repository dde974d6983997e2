//! Shared session over one todo store.
//!
//! # Responsibility
//! - Own the store, navigation stack and add-screen input together.
//! - Expose the list and add screens' interactions as one mutation API.
//!
//! # Invariants
//! - Both screens read and write the same `TodoStore`.
//! - Saving keeps the add screen open; cancelling returns to the list.

use crate::flow::creation::{CreationFlow, CreationOutcome};
use crate::flow::navigation::{Navigator, Route};
use crate::model::todo::ValidationMode;
use crate::persist::todo_persistence::TodoPersistence;
use crate::store::todo_store::{StoreResult, TodoStore};
use crate::view::list::{dispatch_row_event, render_list, ListView, RowEvent};

pub struct TodoSession<P: TodoPersistence> {
    store: TodoStore<P>,
    navigator: Navigator,
    creation: CreationFlow,
}

impl<P: TodoPersistence> TodoSession<P> {
    /// Creates a session and loads persisted todos.
    pub fn open(persistence: P, mode: ValidationMode) -> Self {
        let mut store = TodoStore::new(persistence, mode);
        store.load();
        Self {
            store,
            navigator: Navigator::new(),
            creation: CreationFlow::new(),
        }
    }

    pub fn store(&self) -> &TodoStore<P> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TodoStore<P> {
        &mut self.store
    }

    pub fn route(&self) -> Route {
        self.navigator.current()
    }

    pub fn render(&self) -> ListView {
        render_list(&self.store)
    }

    pub fn row_event(&mut self, id: &str, event: RowEvent) -> StoreResult<bool> {
        dispatch_row_event(&mut self.store, id, event)
    }

    pub fn open_add(&mut self) {
        self.navigator.push(Route::Add);
    }

    pub fn creation(&self) -> &CreationFlow {
        &self.creation
    }

    pub fn creation_mut(&mut self) -> &mut CreationFlow {
        &mut self.creation
    }

    /// Confirms the add screen input.
    pub fn save_add(&mut self) -> StoreResult<CreationOutcome> {
        self.creation.confirm(&mut self.store)
    }

    /// Moves to `route`. Leaving the add screen discards its input.
    pub fn navigate(&mut self, route: Route) {
        match route {
            Route::Add => self.open_add(),
            Route::List => self.cancel_add(),
        }
    }

    /// Discards add screen input and returns to the list.
    pub fn cancel_add(&mut self) {
        self.creation.cancel();
        if self.navigator.current() == Route::Add {
            self.navigator.back();
        }
    }
}
