//! Domain model for task records.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep user-input validation next to the record it protects.
//!
//! # Invariants
//! - Every task is identified by a monotonically assigned integer id.
//! - Deleted ids are never reassigned; the id counter only increases.

pub mod task;
