//! FFI use-case API for the mobile UI.
//!
//! # Responsibility
//! - Expose list/add screen interactions to Dart via FRB.
//! - Hold one process-wide session so both screens share a single store.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Errors are reported as messages inside response envelopes.

use log::warn;
use std::sync::Mutex;
use todolist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, open_sqlite_session,
    ping as ping_inner, Route, RowAction, RowEvent, SqliteTodoSession, StorageConfig, StoreError,
    TodoRow, ValidationMode,
};

static SESSION: Mutex<Option<SqliteTodoSession>> = Mutex::new(None);

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Idempotent for the same `level + log_dir`.
/// - Returns empty string on success and an error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Points the session at an app-owned database file and reloads todos.
///
/// Without this call the first todo call opens `TODOLIST_DB_PATH` or the
/// temp-dir default. Returns empty string on success.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_configure(db_path: String) -> String {
    let trimmed = db_path.trim();
    if trimmed.is_empty() {
        return "db_path cannot be empty".to_string();
    }
    let config = StorageConfig::new(trimmed);
    let session = match open_sqlite_session(&config, ValidationMode::Strict) {
        Ok(session) => session,
        Err(err) => return format!("todo_configure failed: {err}"),
    };
    match SESSION.lock() {
        Ok(mut guard) => {
            *guard = Some(session);
            String::new()
        }
        Err(_) => "todo_configure failed: session lock poisoned".to_string(),
    }
}

/// Returns the current screen name (`list|add`).
#[flutter_rust_bridge::frb(sync)]
pub fn todo_route() -> String {
    with_session(|session| session.route().name().to_string())
        .unwrap_or_else(|_| Route::List.name().to_string())
}

/// Navigates to `list` or `add`. Returning to `list` discards add input.
///
/// Returns empty string on success and an error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_navigate(route: String) -> String {
    let Some(target) = Route::from_name(&route) else {
        return format!("unknown route `{}`; expected list|add", route.trim());
    };
    match with_session(|session| session.navigate(target)) {
        Ok(()) => String::new(),
        Err(err) => format!("todo_navigate failed: {err}"),
    }
}

/// One list row as rendered by the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRowItem {
    pub id: String,
    pub text: String,
    /// Present only while the row is expanded.
    pub description: Option<String>,
    pub finished: bool,
    pub expanded: bool,
    /// Indicator icon name (`caret-up|caret-down`).
    pub indicator: String,
    pub can_complete: bool,
    pub can_delete: bool,
}

/// List screen envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListResponse {
    pub ok: bool,
    pub title: String,
    pub items: Vec<TodoRowItem>,
    /// Whether the last save failed and a `todo_flush` retry is pending.
    pub has_unsaved_changes: bool,
    pub message: String,
}

/// Generic action envelope for row and add-screen actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoActionResponse {
    pub ok: bool,
    /// Whether the action changed any state.
    pub changed: bool,
    /// Created todo id (add only).
    pub todo_id: Option<String>,
    pub message: String,
}

impl TodoActionResponse {
    fn success(changed: bool, todo_id: Option<String>, message: impl Into<String>) -> Self {
        Self {
            ok: true,
            changed,
            todo_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            changed: false,
            todo_id: None,
            message: message.into(),
        }
    }
}

/// Renders the list screen.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_list() -> TodoListResponse {
    match with_session(|session| {
        let view = session.render();
        let unsaved = session.store().has_unsaved_changes();
        (view, unsaved)
    }) {
        Ok((view, has_unsaved_changes)) => TodoListResponse {
            ok: true,
            title: view.title.to_string(),
            message: if view.is_empty() {
                "No todos yet.".to_string()
            } else {
                format!("{} todo(s).", view.rows.len())
            },
            items: view.rows.into_iter().map(to_row_item).collect(),
            has_unsaved_changes,
        },
        Err(err) => TodoListResponse {
            ok: false,
            title: String::new(),
            items: Vec::new(),
            has_unsaved_changes: false,
            message: format!("todo_list failed: {err}"),
        },
    }
}

/// Row body tap: expand or collapse. Never writes storage.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_toggle_expand(id: String) -> TodoActionResponse {
    row_action("todo_toggle_expand", id, RowEvent::BodyTapped)
}

/// Complete icon tap.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_mark_complete(id: String) -> TodoActionResponse {
    row_action("todo_mark_complete", id, RowEvent::CompleteTapped)
}

/// Delete icon tap.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_delete(id: String) -> TodoActionResponse {
    row_action("todo_delete", id, RowEvent::DeleteTapped)
}

/// Add screen save.
///
/// # FFI contract
/// - Inputs are trimmed before validation and storage.
/// - Blank title or description is rejected and nothing changes.
/// - On success `message` carries the user-facing notice.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_add(title: String, description: String) -> TodoActionResponse {
    let result = with_session(|session| {
        let creation = session.creation_mut();
        creation.set_title(title.trim());
        creation.set_description(description.trim());
        session.save_add()
    });
    match result {
        Ok(Ok(outcome)) => TodoActionResponse::success(true, Some(outcome.id), outcome.notice),
        Ok(Err(StoreError::Validation(err))) => TodoActionResponse::failure(err.to_string()),
        Ok(Err(err)) => TodoActionResponse::failure(format!("todo_add failed: {err}")),
        Err(err) => TodoActionResponse::failure(format!("todo_add failed: {err}")),
    }
}

/// Retries saving the full list after a failed write.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_flush() -> TodoActionResponse {
    match with_session(|session| session.store_mut().flush()) {
        Ok(Ok(())) => TodoActionResponse::success(true, None, "Todos saved."),
        Ok(Err(err)) => TodoActionResponse::failure(format!("todo_flush failed: {err}")),
        Err(err) => TodoActionResponse::failure(format!("todo_flush failed: {err}")),
    }
}

fn row_action(op: &str, id: String, event: RowEvent) -> TodoActionResponse {
    match with_session(|session| session.row_event(id.trim(), event)) {
        Ok(Ok(true)) => TodoActionResponse::success(true, None, "Updated."),
        Ok(Ok(false)) => TodoActionResponse::success(false, None, "No matching todo."),
        Ok(Err(err)) => TodoActionResponse::failure(format!("{op} failed: {err}")),
        Err(err) => TodoActionResponse::failure(format!("{op} failed: {err}")),
    }
}

fn with_session<T>(f: impl FnOnce(&mut SqliteTodoSession) -> T) -> Result<T, String> {
    let mut guard = SESSION
        .lock()
        .map_err(|_| "session lock poisoned".to_string())?;
    if guard.is_none() {
        let config = StorageConfig::from_env();
        let session = open_sqlite_session(&config, ValidationMode::Strict).map_err(|err| {
            warn!("event=session_open module=ffi status=error error={err}");
            format!("todo storage open failed: {err}")
        })?;
        *guard = Some(session);
    }
    match guard.as_mut() {
        Some(session) => Ok(f(session)),
        None => Err("todo session unavailable".to_string()),
    }
}

fn to_row_item(row: TodoRow) -> TodoRowItem {
    TodoRowItem {
        indicator: row.indicator().to_string(),
        can_complete: row.actions.contains(&RowAction::Complete),
        can_delete: row.actions.contains(&RowAction::Delete),
        id: row.id,
        text: row.text,
        description: row.description,
        finished: row.finished,
        expanded: row.expanded,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, init_logging, ping, todo_add, todo_delete, todo_list, todo_mark_complete,
        todo_navigate, todo_route, todo_toggle_expand,
    };
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn todo_navigate_rejects_unknown_route() {
        let error = todo_navigate("settings".to_string());
        assert!(error.contains("unknown route"));
        assert!(["list", "add"].contains(&todo_route().as_str()));
    }

    #[test]
    fn todo_add_rejects_blank_description() {
        let response = todo_add(unique_token("blank"), "   ".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("description"));
        assert_eq!(response.todo_id, None);
    }

    #[test]
    fn todo_add_then_expand_complete_and_delete() {
        let title = unique_token("ffi-flow");
        let created = todo_add(format!("  {title}  "), "details".to_string());
        assert!(created.ok, "{}", created.message);
        assert_eq!(created.message, "Todo Added Successfully");
        let id = created.todo_id.expect("add should return todo_id");

        let row = find_row(&id);
        assert_eq!(row.text, title);
        assert!(!row.expanded);
        assert_eq!(row.description, None);

        assert!(todo_toggle_expand(id.clone()).changed);
        let row = find_row(&id);
        assert!(row.expanded);
        assert_eq!(row.description.as_deref(), Some("details"));
        assert!(row.can_complete && row.can_delete);

        assert!(todo_mark_complete(id.clone()).ok);
        let row = find_row(&id);
        assert!(row.finished);
        assert!(!row.expanded);

        let deleted = todo_delete(id.clone());
        assert!(deleted.ok && deleted.changed);
        let again = todo_delete(id.clone());
        assert!(again.ok && !again.changed);
        assert!(todo_list().items.iter().all(|row| row.id != id));
    }

    fn find_row(id: &str) -> super::TodoRowItem {
        let list = todo_list();
        assert!(list.ok, "{}", list.message);
        list.items
            .into_iter()
            .find(|row| row.id == id)
            .expect("row should be listed")
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
