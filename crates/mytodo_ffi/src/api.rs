//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the to-do screen intents to Dart via FRB.
//! - Own the single process-wide screen session.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every response carries a fresh snapshot so the UI re-renders from it.
//! - Blank adds and unknown ids are reported as unchanged, not as failures.

use log::warn;
use mytodo_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Intent, IntentOutcome, ScreenView, TodoScreen,
};
use std::sync::{Mutex, MutexGuard, OnceLock};
use uuid::Uuid;

static SCREEN: OnceLock<Mutex<TodoScreen>> = OnceLock::new();

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
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One rendered list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    /// Item id in string form; pass back to `todo_delete`.
    pub id: String,
    pub value: String,
    pub delete_label: String,
}

/// Full screen render snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoScreenSnapshot {
    pub title: String,
    /// Current input field content.
    pub draft: String,
    pub placeholder: String,
    pub add_label: String,
    /// Rows in display order.
    pub rows: Vec<TodoRow>,
    /// Present only when `rows` is empty.
    pub empty_message: Option<String>,
}

/// Result envelope for add/delete presses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoActionResponse {
    /// False only for malformed input (e.g. unparsable id).
    pub ok: bool,
    /// Whether the list changed.
    pub changed: bool,
    /// Added or removed item id.
    pub item_id: Option<String>,
    /// Human-readable response message for diagnostics.
    pub message: String,
    pub snapshot: TodoScreenSnapshot,
}

/// Mirrors the text field into the session draft.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_set_draft(text: String) -> TodoScreenSnapshot {
    let mut screen = lock_screen();
    screen.dispatch(Intent::EditDraft(text));
    to_snapshot(screen.view())
}

/// Presses Add with the current draft.
///
/// # FFI contract
/// - Blank draft returns `ok=true, changed=false` and keeps the draft.
/// - Successful add clears the draft in the returned snapshot.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_add() -> TodoActionResponse {
    let mut screen = lock_screen();
    let outcome = screen.dispatch(Intent::PressAdd);
    respond(outcome, screen.view())
}

/// Presses Delete on the row with `id`.
///
/// # FFI contract
/// - Unknown id returns `ok=true, changed=false`.
/// - Unparsable id returns `ok=false` and leaves state untouched.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_delete(id: String) -> TodoActionResponse {
    let mut screen = lock_screen();
    let parsed = match Uuid::parse_str(id.trim()) {
        Ok(parsed) => parsed,
        Err(err) => {
            warn!("event=ffi_todo_delete module=ffi status=error reason=bad_id");
            return TodoActionResponse {
                ok: false,
                changed: false,
                item_id: None,
                message: format!("todo_delete failed: invalid id `{id}`: {err}"),
                snapshot: to_snapshot(screen.view()),
            };
        }
    };
    let outcome = screen.dispatch(Intent::PressDelete(parsed));
    respond(outcome, screen.view())
}

/// Returns the current render snapshot.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_snapshot() -> TodoScreenSnapshot {
    to_snapshot(lock_screen().view())
}

/// Drops all items and the draft (hot restart).
#[flutter_rust_bridge::frb(sync)]
pub fn todo_reset() -> TodoScreenSnapshot {
    let mut screen = lock_screen();
    screen.reset();
    to_snapshot(screen.view())
}

fn lock_screen() -> MutexGuard<'static, TodoScreen> {
    // Each mutation is a single Vec/String op, so a poisoned lock still
    // holds consistent state.
    SCREEN
        .get_or_init(|| Mutex::new(TodoScreen::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn respond(outcome: IntentOutcome, view: ScreenView) -> TodoActionResponse {
    let changed = outcome.list_changed();
    let (item_id, message) = match outcome {
        IntentOutcome::Added(id) => (Some(id.to_string()), "Task added.".to_string()),
        IntentOutcome::AddIgnored => (None, "Nothing to add.".to_string()),
        IntentOutcome::Removed(item) => (Some(item.id().to_string()), "Task deleted.".to_string()),
        IntentOutcome::RemoveIgnored(id) => (Some(id.to_string()), "Task not found.".to_string()),
        IntentOutcome::DraftChanged => (None, "Draft updated.".to_string()),
    };
    TodoActionResponse {
        ok: true,
        changed,
        item_id,
        message,
        snapshot: to_snapshot(view),
    }
}

fn to_snapshot(view: ScreenView) -> TodoScreenSnapshot {
    TodoScreenSnapshot {
        title: view.title.to_string(),
        draft: view.draft,
        placeholder: view.placeholder.to_string(),
        add_label: view.add_label.to_string(),
        rows: view
            .rows
            .into_iter()
            .map(|row| TodoRow {
                id: row.id.to_string(),
                value: row.value,
                delete_label: row.delete_label.to_string(),
            })
            .collect(),
        empty_message: view.empty_message.map(str::to_string),
    }
}
