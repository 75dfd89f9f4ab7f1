//! Task domain model.
//!
//! # Responsibility
//! - Define the single checklist entity and its wire shape.
//! - Provide lifecycle helpers for completion state.
//!
//! # Invariants
//! - `id` is assigned at creation and never changes afterwards.
//! - `content` holds one logical line; multi-line input is split into one
//!   task per line before construction.
//! - `completed` starts as `false`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a checklist task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// One checklist item.
///
/// The serialized field names (`id`, `content`, `completed`) are the
/// persistence wire format and must stay stable across releases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable unique ID, used as the reorder/diff key.
    pub id: TaskId,
    /// Free-form single-line description.
    pub content: String,
    /// Whether the task has been checked off.
    pub completed: bool,
}

impl Task {
    /// Creates a new, not-yet-completed task with a generated stable ID.
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), content)
    }

    /// Creates a task with a caller-provided stable ID.
    ///
    /// Used by restore paths where identity already exists in storage.
    pub fn with_id(id: TaskId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            completed: false,
        }
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

#[cfg(test)]
mod tests {
    use super::Task;

    #[test]
    fn new_task_starts_uncompleted() {
        let task = Task::new("write tests");
        assert_eq!(task.content, "write tests");
        assert!(!task.completed);
    }

    #[test]
    fn toggle_flips_back_and_forth() {
        let mut task = Task::new("flip me");
        task.toggle();
        assert!(task.completed);
        task.toggle();
        assert!(!task.completed);
    }

    #[test]
    fn distinct_tasks_get_distinct_ids() {
        let a = Task::new("a");
        let b = Task::new("a");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn wire_shape_uses_stable_field_names() {
        let task = Task::new("serialize me");
        let value = serde_json::to_value(&task).unwrap();
        assert!(value.get("id").is_some());
        assert_eq!(value.get("content").unwrap(), "serialize me");
        assert_eq!(value.get("completed").unwrap(), false);
    }
}
