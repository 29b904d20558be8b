//! Task storage and write-through persistence.
//!
//! # Responsibility
//! - Define the storage error surface shared by store and service layers.
//! - Keep backing-file details inside the persistence boundary.
//!
//! # Invariants
//! - Store writes must enforce `Task::validate()` before persistence.
//! - Store APIs return semantic errors (`NotFound`) in addition to
//!   file-transport errors.
//! - Load paths reject invalid persisted state instead of masking it.

use crate::model::task::{TaskId, TaskValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod json_store;

pub type StoreResult<T> = Result<T, StoreError>;

/// Backing-file transport failure.
#[derive(Debug)]
pub enum PersistenceError {
    /// Reading or writing the backing file failed at the filesystem level.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The backing file holds text that is not a valid snapshot document.
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Display for PersistenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot access backing file `{}`: {source}", path.display())
            }
            Self::Malformed { path, source } => {
                write!(f, "malformed backing file `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for PersistenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Malformed { source, .. } => Some(source),
        }
    }
}

/// Generic store error for task mutation and persistence operations.
#[derive(Debug)]
pub enum StoreError {
    Validation(TaskValidationError),
    NotFound(TaskId),
    Persistence(PersistenceError),
    /// Snapshot parsed as JSON but violates store invariants.
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::Persistence(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted task data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Persistence(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<PersistenceError> for StoreError {
    fn from(value: PersistenceError) -> Self {
        Self::Persistence(value)
    }
}
