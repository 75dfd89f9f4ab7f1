//! Drag and keyboard reorder translation.
//!
//! Both input modalities end in the same contract: the id of the task being
//! moved and the id of the task whose position it takes. The vertical-axis
//! and list-bounds restrictions of the UI show up here as absence: a drag
//! that ends outside the list reports no `over` element, and a keyboard move
//! past the list edge has no neighbor.

use crate::model::task::{Task, TaskId};

/// Terminal report of a drag gesture.
///
/// `over` is the task row under the pointer (or keyboard cursor) when the
/// gesture ended, or `None` when it ended outside the list bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragEndEvent {
    /// The task that was being dragged.
    pub active: TaskId,
    /// The task it was dropped over, if any.
    pub over: Option<TaskId>,
}

/// Direction of a keyboard-driven move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Resolves a drag terminus into a reorder intent.
///
/// Returns `None` when the drag ended over nothing or over the element it
/// started on (identity check by id, matching the store's own guard).
pub fn resolve_reorder(event: &DragEndEvent) -> Option<(TaskId, TaskId)> {
    let over = event.over?;
    if over == event.active {
        return None;
    }
    Some((event.active, over))
}

/// Computes the reorder intent for a keyboard move of one step.
///
/// The target is the adjacent neighbor in the given direction within the
/// current order. Unknown ids and moves past either list edge yield `None`,
/// producing the same no-op behavior as a drag without a target.
pub fn keyboard_move_target(
    tasks: &[Task],
    id: TaskId,
    direction: MoveDirection,
) -> Option<(TaskId, TaskId)> {
    let position = tasks.iter().position(|task| task.id == id)?;
    let neighbor = match direction {
        MoveDirection::Up => position.checked_sub(1)?,
        MoveDirection::Down => {
            let below = position + 1;
            if below >= tasks.len() {
                return None;
            }
            below
        }
    };
    Some((id, tasks[neighbor].id))
}
