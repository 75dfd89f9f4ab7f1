//! FFI use-case API for UI-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level checklist functions to the UI shell.
//! - Translate gesture reports into list store mutations.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Invalid id strings fail softly with an error envelope.
//! - Every mutation is durable before the call returns (write-through core).

use checklist_core::db::open_db;
use checklist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    keyboard_move_target, ping as ping_inner, resolve_reorder, ChecklistStore, DragEndEvent,
    MoveDirection, SqliteSnapshotRepository, TaskId,
};
use log::error;
use std::path::PathBuf;
use std::sync::OnceLock;

const DB_FILE_NAME: &str = "checklist.sqlite3";
const DB_PATH_ENV_VAR: &str = "CHECKLIST_DB_PATH";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for bridge smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
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
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One task row as rendered by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    /// Stable task ID in string form.
    pub id: String,
    /// Task description text.
    pub content: String,
    /// Whether the task is checked off.
    pub completed: bool,
}

/// Response envelope carrying the current task sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListResponse {
    /// Tasks in display order (empty on failure).
    pub items: Vec<TaskItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Response envelope for the submit flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTasksResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// IDs of the created tasks, in append order.
    pub created_ids: Vec<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

/// Generic action response envelope for toggle/delete/reorder flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Whether the list actually changed (no-ops report `false`).
    pub changed: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn applied(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            changed: true,
            message: message.into(),
        }
    }

    fn noop(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            changed: false,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            changed: false,
            message: message.into(),
        }
    }
}

/// Returns the current task sequence in display order.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; failures return an empty list plus a message.
#[flutter_rust_bridge::frb(sync)]
pub fn list_tasks() -> ListResponse {
    match with_store(|store| Ok(store.tasks().iter().map(to_task_item).collect::<Vec<_>>())) {
        Ok(items) => {
            let message = format!("{} task(s).", items.len());
            ListResponse { items, message }
        }
        Err(err) => ListResponse {
            items: Vec::new(),
            message: format!("list_tasks failed: {err}"),
        },
    }
}

/// Submits raw multi-line input, appending one task per non-blank line.
///
/// Blank input is accepted and creates nothing, matching the submit
/// affordance's behavior.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn list_add_tasks(raw_text: String) -> AddTasksResponse {
    match with_store(|store| store.add_tasks(&raw_text).map_err(|err| err.to_string())) {
        Ok(ids) => AddTasksResponse {
            ok: true,
            message: format!("Added {} task(s).", ids.len()),
            created_ids: ids.iter().map(TaskId::to_string).collect(),
        },
        Err(err) => AddTasksResponse {
            ok: false,
            created_ids: Vec::new(),
            message: format!("list_add_tasks failed: {err}"),
        },
    }
}

/// Toggles the completion flag of one task.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Unknown ids are a successful no-op; malformed ids fail softly.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn list_toggle_task(id: String) -> ActionResponse {
    let Some(task_id) = parse_task_id(&id) else {
        return ActionResponse::failure(format!("invalid task id `{id}`"));
    };
    match with_store(|store| store.toggle_complete(task_id).map_err(|err| err.to_string())) {
        Ok(true) => ActionResponse::applied("Task toggled."),
        Ok(false) => ActionResponse::noop("No such task."),
        Err(err) => ActionResponse::failure(format!("list_toggle_task failed: {err}")),
    }
}

/// Deletes one task.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Unknown ids are a successful no-op; malformed ids fail softly.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn list_delete_task(id: String) -> ActionResponse {
    let Some(task_id) = parse_task_id(&id) else {
        return ActionResponse::failure(format!("invalid task id `{id}`"));
    };
    match with_store(|store| store.delete_task(task_id).map_err(|err| err.to_string())) {
        Ok(true) => ActionResponse::applied("Task deleted."),
        Ok(false) => ActionResponse::noop("No such task."),
        Err(err) => ActionResponse::failure(format!("list_delete_task failed: {err}")),
    }
}

/// Reports the end of a drag gesture.
///
/// `over_id` is the task row the drag ended on, or `None` when it ended
/// outside the list bounds. A drag back onto its own source element is a
/// successful no-op.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn list_drag_end(active_id: String, over_id: Option<String>) -> ActionResponse {
    let Some(active) = parse_task_id(&active_id) else {
        return ActionResponse::failure(format!("invalid task id `{active_id}`"));
    };
    let over = match over_id {
        None => None,
        Some(raw) => match parse_task_id(&raw) {
            Some(id) => Some(id),
            None => return ActionResponse::failure(format!("invalid task id `{raw}`")),
        },
    };

    let Some((source, target)) = resolve_reorder(&DragEndEvent { active, over }) else {
        return ActionResponse::noop("Drag ended without a reorder.");
    };
    match with_store(|store| store.reorder(source, target).map_err(|err| err.to_string())) {
        Ok(true) => ActionResponse::applied("Task moved."),
        Ok(false) => ActionResponse::noop("No such task."),
        Err(err) => ActionResponse::failure(format!("list_drag_end failed: {err}")),
    }
}

/// Moves one task a single step up or down via the keyboard modality.
///
/// Produces the same reorder contract as a pointer drag; moves past either
/// list edge are successful no-ops.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn list_move_task(id: String, direction: String) -> ActionResponse {
    let Some(task_id) = parse_task_id(&id) else {
        return ActionResponse::failure(format!("invalid task id `{id}`"));
    };
    let direction = match direction.trim().to_ascii_lowercase().as_str() {
        "up" => MoveDirection::Up,
        "down" => MoveDirection::Down,
        other => {
            return ActionResponse::failure(format!(
                "invalid direction `{other}`; expected up|down"
            ));
        }
    };

    let moved = with_store(|store| {
        let Some((source, target)) = keyboard_move_target(store.tasks(), task_id, direction)
        else {
            return Ok(false);
        };
        store.reorder(source, target).map_err(|err| err.to_string())
    });
    match moved {
        Ok(true) => ActionResponse::applied("Task moved."),
        Ok(false) => ActionResponse::noop("Nothing to move."),
        Err(err) => ActionResponse::failure(format!("list_move_task failed: {err}")),
    }
}

fn parse_task_id(raw: &str) -> Option<TaskId> {
    uuid::Uuid::parse_str(raw.trim()).ok()
}

fn to_task_item(task: &checklist_core::Task) -> TaskItem {
    TaskItem {
        id: task.id.to_string(),
        content: task.content.clone(),
        completed: task.completed,
    }
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(DB_PATH_ENV_VAR) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}

fn with_store<T>(
    f: impl FnOnce(&mut ChecklistStore<SqliteSnapshotRepository<'_>>) -> Result<T, String>,
) -> Result<T, String> {
    let db_path = resolve_db_path();
    let conn = open_db(&db_path).map_err(|err| {
        error!("event=store_db_open module=ffi status=error error={err}");
        format!("checklist DB open failed: {err}")
    })?;
    let repo = SqliteSnapshotRepository::try_new(&conn)
        .map_err(|err| format!("checklist repo init failed: {err}"))?;
    let mut store =
        ChecklistStore::open(repo).map_err(|err| format!("checklist store open failed: {err}"))?;
    f(&mut store)
}
