//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the key-value snapshot contract the list store persists through.
//! - Isolate SQLite query details from store orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (schema readiness) in addition
//!   to DB transport errors.
//! - Stored values are opaque strings; encoding belongs to the caller.

pub mod snapshot_repo;
