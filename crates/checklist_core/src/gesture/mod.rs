//! Reorder gesture resolution.
//!
//! # Responsibility
//! - Translate drag and keyboard gesture reports into the single
//!   `(source_id, target_id)` reorder contract the list store consumes.
//!
//! # Invariants
//! - Translators are pure functions with no state of their own.
//! - A gesture that cannot name a distinct, existing target resolves to
//!   no reorder at all.

pub mod reorder;
