use axum::{body::Bytes, extract::State, http::StatusCode, Json};

use crate::models::Task;
use crate::store::TaskStore;

// ============================================================
// Error Handling
// ============================================================

/// Log a rejected submission and return the reason to the client.
/// Everything a create can fail on (unreadable body, malformed record,
/// duplicate id) is caused by the request itself, so the status is always
/// BAD_REQUEST and the error text is safe to expose as the body.
fn bad_request(e: impl std::fmt::Display) -> (StatusCode, String) {
    let msg = e.to_string();
    tracing::warn!("Rejected task submission: {}", msg);
    (StatusCode::BAD_REQUEST, msg)
}

// ============================================================
// Tasks
// ============================================================

pub async fn list_tasks(State(store): State<TaskStore>) -> Json<Vec<Task>> {
    // Json itself answers 500 with the error text if serialization fails.
    Json(store.get_all())
}

/// Add the task in the request body to the store.
///
/// The body is taken as raw bytes and parsed by hand: a failed body read
/// and an invalid record both answer 400 with the reason, and a duplicate
/// id answers 400 with a fixed message. The store is untouched on every
/// failure path.
pub async fn create_task(
    State(store): State<TaskStore>,
    body: Bytes,
) -> Result<StatusCode, (StatusCode, String)> {
    let task: Task = serde_json::from_slice(&body).map_err(bad_request)?;

    store.insert(task).map_err(bad_request)?;

    Ok(StatusCode::CREATED)
}
