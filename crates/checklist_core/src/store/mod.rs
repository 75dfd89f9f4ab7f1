//! Checklist state ownership and mutation orchestration.
//!
//! # Responsibility
//! - Own the ordered task sequence for a session.
//! - Translate user intents into state transitions and write-through saves.
//!
//! # Invariants
//! - The store is the only component that mutates the task sequence.
//! - Every state-changing operation persists before returning.

pub mod list_store;
