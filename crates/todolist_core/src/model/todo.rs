//! Todo domain model.
//!
//! # Responsibility
//! - Define the persisted todo record and its creation input.
//! - Own creation-time validation rules for both input modes.
//!
//! # Invariants
//! - `id` is stable and never reassigned after creation.
//! - `TodoItem` carries domain data only; expand/collapse lives in
//!   `view::expansion` and is never serialized.
//! - `finished` only ever moves from `false` to `true`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque todo identifier.
///
/// Kept as a plain string so ids written by older clients load verbatim.
pub type TodoId = String;

/// Generates a fresh unique todo id.
pub fn new_todo_id() -> TodoId {
    Uuid::new_v4().simple().to_string()
}

/// Persisted todo record.
///
/// Field names match the stored blob layout exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    /// Short title shown in the list row.
    pub text: String,
    /// Free-text detail. Missing in blobs written by the minimal client.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub finished: bool,
}

impl TodoItem {
    /// Creates an unfinished todo with a generated id.
    pub fn new(text: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_id(new_todo_id(), text, description)
    }

    /// Creates an unfinished todo with a caller-provided id.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(
        id: impl Into<TodoId>,
        text: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            description: description.into(),
            finished: false,
        }
    }

    /// Marks this todo finished. Calling it again has no further effect.
    pub fn complete(&mut self) {
        self.finished = true;
    }
}

/// Creation input collected by the add screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: String,
    pub description: String,
}

impl TodoDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Validates this draft under the given mode.
    ///
    /// # Errors
    /// - `EmptyTitle` when the title is blank in `Strict` mode (checked first).
    /// - `EmptyDescription` when the description is blank in `Strict` mode.
    pub fn validate(&self, mode: ValidationMode) -> Result<(), TodoValidationError> {
        if mode == ValidationMode::Lenient {
            return Ok(());
        }
        if self.title.trim().is_empty() {
            return Err(TodoValidationError::EmptyTitle);
        }
        if self.description.trim().is_empty() {
            return Err(TodoValidationError::EmptyDescription);
        }
        Ok(())
    }

    /// Converts this draft into a new unfinished record with a fresh id.
    pub fn into_item(self) -> TodoItem {
        TodoItem::new(self.title, self.description)
    }
}

/// Creation-time validation policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Title and description must both be non-blank.
    #[default]
    Strict,
    /// No validation; any input is accepted.
    Lenient,
}

/// Validation failure for creation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoValidationError {
    EmptyTitle,
    EmptyDescription,
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::EmptyDescription => write!(f, "description must not be empty"),
        }
    }
}

impl Error for TodoValidationError {}
