//! Task domain model.
//!
//! # Responsibility
//! - Define the task record persisted by the store.
//! - Validate user-supplied task text on every write path.
//!
//! # Invariants
//! - `id` is assigned once by the store counter and never reused.
//! - `text` is non-blank for every persisted task.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a task record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = u64;

/// Validation failure for user-supplied task fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Task text is empty or whitespace-only.
    EmptyText,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text cannot be empty or blank"),
        }
    }
}

impl Error for TaskValidationError {}

/// One to-do item with identity, text and completion flag.
///
/// Field names are the wire names of the backing-file format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Monotonically assigned id, unique for the store lifetime.
    pub id: TaskId,
    /// User-facing description.
    pub text: String,
    /// Completion flag; every task starts pending.
    pub completed: bool,
}

impl Task {
    /// Creates a pending task with the given id.
    ///
    /// Text validation happens on the store write path, not here, so
    /// deserialized records can be checked with the same code.
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Rejects empty or whitespace-only task text.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        validate_text(&self.text)
    }

    /// Marks the task as done.
    pub fn mark_completed(&mut self) {
        self.completed = true;
    }
}

/// Shared text check used by the add and edit paths.
pub fn validate_text(text: &str) -> Result<(), TaskValidationError> {
    if text.trim().is_empty() {
        return Err(TaskValidationError::EmptyText);
    }
    Ok(())
}
