//! Task endpoints, nested under `/tasks`.
//!
//! Request-shape validation lives here; everything past it is the store's
//! business.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, get, patch},
    Json, Router,
};
use serde_json::Value;

use crate::store::Task;

use super::error::ApiError;
use super::routes::AppState;

/// Create task routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_tasks).post(create_task))
        .route("/:id/toggle", patch(toggle_task))
        .route("/:id", delete(delete_task))
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET /tasks - List all tasks in insertion order.
async fn list_tasks(State(state): State<Arc<AppState>>) -> Json<Vec<Task>> {
    Json(state.tasks.list().await)
}

/// POST /tasks - Create a new task.
///
/// The body must be JSON carrying a string `title`; anything else is a 400
/// before the store is consulted.
async fn create_task(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let Json(body) =
        payload.map_err(|_| ApiError::Validation("Request body must be JSON".to_string()))?;
    let title = body
        .get("title")
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::Validation("Invalid title format".to_string()))?;

    let task = state.tasks.create(title).await?;

    tracing::info!("Created task {} ({:?})", task.id, task.title);

    Ok((StatusCode::CREATED, Json(task)))
}

/// PATCH /tasks/:id/toggle - Flip a task's done flag.
async fn toggle_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    let id = parse_id(&id)?;
    let task = state.tasks.toggle(id).await?;
    Ok(Json(task))
}

/// DELETE /tasks/:id - Remove a task.
async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.tasks.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// A non-numeric id cannot match any stored task, so it reports not found
/// rather than a validation failure.
fn parse_id(raw: &str) -> Result<u64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::NotFound("Task not found".to_string()))
}
