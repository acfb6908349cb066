use serde::{Deserialize, Serialize};

/// A single entry in the shared task list.
///
/// The `id` is chosen by whoever submits the task; the service never
/// generates identifiers. Once stored, a task is immutable: there is no
/// update or delete, so a record either exists exactly as submitted or
/// not at all.
///
/// Every field must be present when a task is parsed from JSON, but any
/// of them may be empty. Nothing else about the values is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique key within the store, supplied by the client.
    pub id: String,
    /// Short summary of the work.
    pub description: String,
    /// Free-form context for the task.
    pub note: String,
    /// Applications used while working on the task, in submission order.
    pub applications: Vec<String>,
}
