//! JSON-file backed task store.
//!
//! # Responsibility
//! - Keep the ordered task collection and id counter in memory.
//! - Mirror every mutation to the backing file before returning.
//! - Restore prior state exactly once at open.
//!
//! # Invariants
//! - Ids are strictly increasing and never reused, even across deletes.
//! - A malformed or inconsistent backing file fails `open`; it is never
//!   silently replaced with an empty collection.
//! - Every successful mutation has already reached the backing file.

use crate::model::task::{validate_text, Task, TaskId};
use crate::store::{PersistenceError, StoreError, StoreResult};
use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Wire shape of the backing file: `{ "tasks": [...], "next_id": N }`.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    tasks: Vec<Task>,
    next_id: TaskId,
}

/// Ordered task collection with write-through JSON persistence.
///
/// The store assumes exclusive single-process access to its backing file;
/// callers that serve concurrent requests must wrap it in a lock (see
/// `service::task_service`).
#[derive(Debug)]
pub struct JsonTaskStore {
    path: Option<PathBuf>,
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl JsonTaskStore {
    /// Opens a store backed by `path`, restoring prior state when present.
    ///
    /// # Contract
    /// - Missing file: start empty with `next_id = 1`.
    /// - Unreadable, unparseable or inconsistent file: fail with the
    ///   corresponding error instead of discarding data.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let started_at = Instant::now();
        info!(
            "event=store_open module=store status=start path={}",
            path.display()
        );

        match Self::load(path.clone()) {
            Ok(store) => {
                info!(
                    "event=store_open module=store status=ok tasks={} next_id={} duration_ms={}",
                    store.tasks.len(),
                    store.next_id,
                    started_at.elapsed().as_millis()
                );
                Ok(store)
            }
            Err(err) => {
                error!(
                    "event=store_open module=store status=error path={} duration_ms={} error={}",
                    path.display(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Creates a store with no backing file; mutations skip persistence.
    ///
    /// Intended for tests and demos, the same role in-memory databases
    /// play for disk-backed ones.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    fn load(path: PathBuf) -> StoreResult<Self> {
        match read_snapshot(&path)? {
            Some(snapshot) => Self::from_snapshot(path, snapshot),
            None => Ok(Self {
                path: Some(path),
                tasks: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn from_snapshot(path: PathBuf, snapshot: Snapshot) -> StoreResult<Self> {
        if snapshot.next_id == 0 {
            return Err(StoreError::InvalidData(
                "next_id must be at least 1".to_string(),
            ));
        }

        let mut seen_ids = HashSet::new();
        for task in &snapshot.tasks {
            task.validate()?;
            if !seen_ids.insert(task.id) {
                return Err(StoreError::InvalidData(format!(
                    "duplicate task id {}",
                    task.id
                )));
            }
            if task.id >= snapshot.next_id {
                return Err(StoreError::InvalidData(format!(
                    "task id {} is not below next_id {}",
                    task.id, snapshot.next_id
                )));
            }
        }

        Ok(Self {
            path: Some(path),
            tasks: snapshot.tasks,
            next_id: snapshot.next_id,
        })
    }

    /// Appends a pending task and returns the created record.
    ///
    /// # Contract
    /// - Rejects empty/blank text before assigning an id.
    /// - The id counter advances exactly once per successful add.
    pub fn add(&mut self, text: impl Into<String>) -> StoreResult<Task> {
        let text = text.into();
        validate_text(&text)?;

        let task = Task::new(self.next_id, text);
        self.tasks.push(task.clone());
        self.next_id += 1;
        self.save()?;
        Ok(task)
    }

    /// Marks the task with `id` as completed.
    pub fn complete(&mut self, id: TaskId) -> StoreResult<()> {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => task.mark_completed(),
            None => return Err(StoreError::NotFound(id)),
        }
        self.save()
    }

    /// Replaces the text of the task with `id`.
    ///
    /// Lookup happens before text validation, so a missing id reports
    /// `NotFound` even when the replacement text is also invalid.
    pub fn edit(&mut self, id: TaskId, new_text: impl Into<String>) -> StoreResult<()> {
        let new_text = new_text.into();
        let position = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))?;
        validate_text(&new_text)?;

        self.tasks[position].text = new_text;
        self.save()
    }

    /// Removes the task with `id` entirely. The id counter is untouched.
    pub fn delete(&mut self, id: TaskId) -> StoreResult<()> {
        let position = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))?;

        self.tasks.remove(position);
        self.save()
    }

    /// Returns all tasks in insertion order.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up one task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Next id the store will assign. Exposed for invariant checks.
    pub fn next_id(&self) -> TaskId {
        self.next_id
    }

    /// Serializes the full collection and counter to the backing file.
    ///
    /// Writes a sibling temp file first and renames it over the target,
    /// which is atomic enough for the single-process contract.
    fn save(&self) -> StoreResult<()> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };

        let snapshot = Snapshot {
            tasks: self.tasks.clone(),
            next_id: self.next_id,
        };
        let body = serde_json::to_string_pretty(&snapshot).map_err(|source| {
            PersistenceError::Malformed {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let tmp_path = path.with_extension("tmp");
        let result = fs::write(&tmp_path, body).and_then(|()| fs::rename(&tmp_path, path));
        if let Err(source) = result {
            let err = PersistenceError::Io {
                path: path.to_path_buf(),
                source,
            };
            error!("event=store_save module=store status=error error={err}");
            return Err(err.into());
        }

        // Debug level: save runs after every mutation, info would flood.
        debug!(
            "event=store_save module=store status=ok tasks={} next_id={}",
            self.tasks.len(),
            self.next_id
        );
        Ok(())
    }
}

fn read_snapshot(path: &Path) -> StoreResult<Option<Snapshot>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(source) if source.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(PersistenceError::Io {
                path: path.to_path_buf(),
                source,
            }
            .into())
        }
    };

    let snapshot = serde_json::from_str(&raw).map_err(|source| PersistenceError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(snapshot))
}
