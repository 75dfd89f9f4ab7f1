//! UI-facing bridge crate for the checklist app.
//!
//! Exposes the synchronous use-case API consumed by the embedding UI shell.

pub mod api;

pub use api::*;
