//! Core domain logic for the checklist app.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod gesture;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use gesture::reorder::{keyboard_move_target, resolve_reorder, DragEndEvent, MoveDirection};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskId};
pub use repo::snapshot_repo::{
    RepoError, RepoResult, SnapshotRepository, SqliteSnapshotRepository, TASKS_STORAGE_KEY,
};
pub use store::list_store::{ChecklistStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
