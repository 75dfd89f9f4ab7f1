//! Checklist list store.
//!
//! # Responsibility
//! - Hold the ordered task sequence as the single source of truth.
//! - Apply add/toggle/delete/reorder intents and persist after each change.
//! - Restore state from the snapshot repository at startup.
//!
//! # Invariants
//! - Task ids are unique within the sequence at all times.
//! - In-memory order, persisted order and restored order are identical.
//! - A malformed persisted snapshot is recovered as an empty list, never
//!   surfaced as an error.
//! - No-op intents (missing id, identical reorder target, blank input) do
//!   not write to storage.

use crate::model::task::{Task, TaskId};
use crate::repo::snapshot_repo::{RepoError, SnapshotRepository, TASKS_STORAGE_KEY};
use log::{debug, info, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for list store persistence paths.
///
/// Only the write path is fallible from the caller's point of view; load
/// failures at startup degrade to an empty list by design.
#[derive(Debug)]
pub enum StoreError {
    /// Snapshot could not be encoded for persistence.
    Encode(serde_json::Error),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "failed to encode task snapshot: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Ordered task sequence with an initialize/mutate/persist lifecycle.
///
/// Instantiated once per session over a snapshot repository; every
/// state-changing operation re-serializes the full sequence and overwrites
/// the stored value synchronously before returning.
pub struct ChecklistStore<R: SnapshotRepository> {
    repo: R,
    tasks: Vec<Task>,
}

impl<R: SnapshotRepository> ChecklistStore<R> {
    /// Opens a store, restoring the persisted task sequence.
    ///
    /// An absent snapshot yields an empty list. A snapshot that fails to
    /// decode, or that violates id uniqueness, is discarded with a warning
    /// and also yields an empty list.
    ///
    /// # Errors
    /// Returns `StoreError::Repo` only when the repository itself cannot be
    /// read (transport failure), not for malformed content.
    pub fn open(repo: R) -> StoreResult<Self> {
        let tasks = match repo.load(TASKS_STORAGE_KEY)? {
            None => Vec::new(),
            Some(raw) => decode_snapshot(&raw),
        };

        info!(
            "event=store_open module=store status=ok count={}",
            tasks.len()
        );
        Ok(Self { repo, tasks })
    }

    /// Returns the current task sequence in display order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends one task per non-blank line of `raw_text`.
    ///
    /// Input that trims to empty creates nothing and does not persist.
    /// Returns the ids of the created tasks in append order.
    ///
    /// # Errors
    /// Fails only when the write-through save fails.
    pub fn add_tasks(&mut self, raw_text: &str) -> StoreResult<Vec<TaskId>> {
        if raw_text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let created: Vec<Task> = raw_text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(Task::new)
            .collect();
        if created.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<TaskId> = created.iter().map(|task| task.id).collect();
        self.tasks.extend(created);
        self.persist()?;
        Ok(ids)
    }

    /// Flips `completed` on the task matching `id`.
    ///
    /// Returns `true` when a task changed; a missing id is a silent no-op.
    ///
    /// # Errors
    /// Fails only when the write-through save fails.
    pub fn toggle_complete(&mut self, id: TaskId) -> StoreResult<bool> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!("event=toggle_task module=store status=noop reason=unknown_id id={id}");
            return Ok(false);
        };

        task.toggle();
        self.persist()?;
        Ok(true)
    }

    /// Removes the task matching `id`, keeping the relative order of the
    /// remaining tasks.
    ///
    /// Returns `true` when a task was removed; a missing id is a silent
    /// no-op.
    ///
    /// # Errors
    /// Fails only when the write-through save fails.
    pub fn delete_task(&mut self, id: TaskId) -> StoreResult<bool> {
        let Some(position) = self.tasks.iter().position(|task| task.id == id) else {
            debug!("event=delete_task module=store status=noop reason=unknown_id id={id}");
            return Ok(false);
        };

        self.tasks.remove(position);
        self.persist()?;
        Ok(true)
    }

    /// Moves the task matching `source_id` to the position currently held
    /// by `target_id`, shifting the tasks in between by one.
    ///
    /// Single-element move semantics, not a swap. Identity and unknown ids
    /// are silent no-ops. Returns `true` when the order changed.
    ///
    /// # Errors
    /// Fails only when the write-through save fails.
    pub fn reorder(&mut self, source_id: TaskId, target_id: TaskId) -> StoreResult<bool> {
        if source_id == target_id {
            return Ok(false);
        }
        let (Some(source_pos), Some(target_pos)) = (
            self.tasks.iter().position(|task| task.id == source_id),
            self.tasks.iter().position(|task| task.id == target_id),
        ) else {
            debug!(
                "event=reorder module=store status=noop reason=unknown_id source={source_id} target={target_id}"
            );
            return Ok(false);
        };

        let moved = self.tasks.remove(source_pos);
        self.tasks.insert(target_pos, moved);
        self.persist()?;
        Ok(true)
    }

    fn persist(&self) -> StoreResult<()> {
        let encoded = serde_json::to_string(&self.tasks)?;
        self.repo.save(TASKS_STORAGE_KEY, &encoded)?;
        debug!(
            "event=list_persist module=store status=ok count={}",
            self.tasks.len()
        );
        Ok(())
    }
}

fn decode_snapshot(raw: &str) -> Vec<Task> {
    let tasks = match serde_json::from_str::<Vec<Task>>(raw) {
        Ok(tasks) => tasks,
        Err(err) => {
            warn!(
                "event=store_open module=store status=recovered reason=malformed_snapshot error={err}"
            );
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    if tasks.iter().any(|task| !seen.insert(task.id)) {
        warn!("event=store_open module=store status=recovered reason=duplicate_task_ids");
        return Vec::new();
    }

    tasks
}

#[cfg(test)]
mod tests {
    use super::{decode_snapshot, ChecklistStore, StoreResult};
    use crate::model::task::Task;
    use crate::repo::snapshot_repo::{RepoResult, SnapshotRepository};
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Plain in-memory collaborator; keeps unit tests free of SQLite.
    #[derive(Default)]
    struct MemoryRepo {
        values: RefCell<HashMap<String, String>>,
    }

    impl SnapshotRepository for MemoryRepo {
        fn load(&self, key: &str) -> RepoResult<Option<String>> {
            Ok(self.values.borrow().get(key).cloned())
        }

        fn save(&self, key: &str, value: &str) -> RepoResult<()> {
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    fn open_empty() -> StoreResult<ChecklistStore<MemoryRepo>> {
        ChecklistStore::open(MemoryRepo::default())
    }

    #[test]
    fn open_with_no_snapshot_starts_empty() {
        let store = open_empty().unwrap();
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn malformed_snapshot_recovers_to_empty_list() {
        let repo = MemoryRepo::default();
        repo.save("tasks", "not json at all").unwrap();
        let store = ChecklistStore::open(repo).unwrap();
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn wrong_shape_snapshot_recovers_to_empty_list() {
        let repo = MemoryRepo::default();
        repo.save("tasks", r#"{"id":"x"}"#).unwrap();
        let store = ChecklistStore::open(repo).unwrap();
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn duplicate_ids_in_snapshot_are_discarded() {
        let task = Task::new("dup");
        let raw = serde_json::to_string(&vec![task.clone(), task]).unwrap();
        assert!(decode_snapshot(&raw).is_empty());
    }

    #[test]
    fn blank_input_creates_nothing_and_writes_nothing() {
        let mut store = open_empty().unwrap();
        assert!(store.add_tasks("").unwrap().is_empty());
        assert!(store.add_tasks("   ").unwrap().is_empty());
        assert!(store.add_tasks("\n\n").unwrap().is_empty());
        assert!(store.repo.values.borrow().is_empty());
    }

    #[test]
    fn noop_mutations_do_not_write() {
        let mut store = open_empty().unwrap();
        let ghost = Task::new("never added").id;
        assert!(!store.toggle_complete(ghost).unwrap());
        assert!(!store.delete_task(ghost).unwrap());
        assert!(!store.reorder(ghost, ghost).unwrap());
        assert!(store.repo.values.borrow().is_empty());
    }

    #[test]
    fn every_mutation_overwrites_the_snapshot() {
        let mut store = open_empty().unwrap();
        let ids = store.add_tasks("a\nb").unwrap();
        let after_add = store.repo.values.borrow().get("tasks").cloned().unwrap();

        store.toggle_complete(ids[0]).unwrap();
        let after_toggle = store.repo.values.borrow().get("tasks").cloned().unwrap();
        assert_ne!(after_add, after_toggle);

        store.reorder(ids[1], ids[0]).unwrap();
        let after_reorder = store.repo.values.borrow().get("tasks").cloned().unwrap();
        assert_ne!(after_toggle, after_reorder);
    }
}
