use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::models::Task;

/// Error returned when the store rejects an insert.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with the same `id` is already held. The message is fixed;
    /// clients are allowed to match on it verbatim.
    #[error("a task with the given id already exists")]
    AlreadyExists { id: String },
}

/// The in-memory task collection shared by every request handler.
///
/// All access goes through one mutex, so readers see a consistent snapshot
/// and two inserts racing on the same id resolve to exactly one winner.
/// Cloning the store clones the handle, not the contents.
pub struct TaskStore {
    tasks: Arc<Mutex<HashMap<String, Task>>>,
}

impl TaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_tasks([])
    }

    /// Create a store pre-populated with `tasks`, keyed by their ids.
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let tasks = tasks
            .into_iter()
            .map(|task| (task.id.clone(), task))
            .collect();
        Self {
            tasks: Arc::new(Mutex::new(tasks)),
        }
    }

    /// Create a store holding the two example tasks (ids "1" and "2") that
    /// the server binary starts with.
    pub fn seeded() -> Self {
        Self::with_tasks([
            Task {
                id: "1".to_string(),
                description: "Finish the REST API exercise".to_string(),
                note: "If it lands today, tomorrow is a free day".to_string(),
                applications: vec![
                    "VS Code".to_string(),
                    "Terminal".to_string(),
                    "git".to_string(),
                ],
            },
            Task {
                id: "2".to_string(),
                description: "Run the finished endpoints through Postman".to_string(),
                note: "Best done while developing: re-check each handler whenever the server restarts".to_string(),
                applications: vec![
                    "VS Code".to_string(),
                    "Terminal".to_string(),
                    "git".to_string(),
                    "Postman".to_string(),
                ],
            },
        ])
    }

    // ============================================================
    // Task operations
    // ============================================================

    /// Return every record currently held. Order is unspecified.
    pub fn get_all(&self) -> Vec<Task> {
        let tasks = self.tasks.lock().expect("task store lock poisoned");
        tasks.values().cloned().collect()
    }

    /// Insert `task` under its `id` if that id is not taken yet.
    ///
    /// On collision the store is left untouched and the earlier record
    /// wins; on success the record is immediately visible to [`get_all`].
    ///
    /// [`get_all`]: TaskStore::get_all
    pub fn insert(&self, task: Task) -> Result<(), StoreError> {
        let mut tasks = self.tasks.lock().expect("task store lock poisoned");
        match tasks.entry(task.id.clone()) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists { id: task.id }),
            Entry::Vacant(slot) => {
                slot.insert(task);
                Ok(())
            }
        }
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TaskStore {
    fn clone(&self) -> Self {
        Self {
            tasks: self.tasks.clone(),
        }
    }
}
