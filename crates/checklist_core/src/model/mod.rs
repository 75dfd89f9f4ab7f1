//! Checklist domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its identifier scheme.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId` that is never reused.
//! - Display order of the task list is significant and is the persisted order.

pub mod task;
