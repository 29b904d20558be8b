//! Router-facing task service.
//!
//! # Responsibility
//! - Expose the five router operations over one shared store handle.
//! - Serialize every mutation behind a single lock.
//!
//! # Invariants
//! - Service APIs never bypass store validation/persistence contracts.
//! - Interleaved callers cannot corrupt the id counter or lose writes.
//! - A poisoned lock surfaces as an error, never a panic.

use crate::model::task::{Task, TaskId};
use crate::store::json_store::JsonTaskStore;
use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex, MutexGuard};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for router-facing task operations.
#[derive(Debug)]
pub enum ServiceError {
    /// Store-level failure, forwarded unchanged.
    Store(StoreError),
    /// A prior panic while holding the store lock poisoned it.
    LockPoisoned,
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::LockPoisoned => write!(f, "task store lock is poisoned"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::LockPoisoned => None,
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Shared handle exposing the router contract over one task store.
///
/// Cloning the service clones the handle; all clones mutate the same
/// store through one mutex, so concurrent request handlers get a single
/// serialized mutation entry point.
#[derive(Clone)]
pub struct TaskService {
    store: Arc<Mutex<JsonTaskStore>>,
}

impl TaskService {
    /// Wraps an opened store in a shared, lock-guarded handle.
    pub fn new(store: JsonTaskStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Returns all tasks in insertion order.
    pub fn list_tasks(&self) -> ServiceResult<Vec<Task>> {
        let store = self.lock()?;
        Ok(store.list().to_vec())
    }

    /// Adds a task and returns the created record.
    pub fn add_task(&self, text: impl Into<String>) -> ServiceResult<Task> {
        let mut store = self.lock()?;
        Ok(store.add(text)?)
    }

    /// Marks one task as completed.
    pub fn complete_task(&self, id: TaskId) -> ServiceResult<()> {
        let mut store = self.lock()?;
        Ok(store.complete(id)?)
    }

    /// Replaces one task's text.
    pub fn edit_task(&self, id: TaskId, new_text: impl Into<String>) -> ServiceResult<()> {
        let mut store = self.lock()?;
        Ok(store.edit(id, new_text)?)
    }

    /// Removes one task entirely.
    pub fn delete_task(&self, id: TaskId) -> ServiceResult<()> {
        let mut store = self.lock()?;
        Ok(store.delete(id)?)
    }

    fn lock(&self) -> Result<MutexGuard<'_, JsonTaskStore>, ServiceError> {
        self.store.lock().map_err(|_| ServiceError::LockPoisoned)
    }
}
