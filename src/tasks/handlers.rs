//! HTTP handlers for the task API
use super::error::TaskError;
use super::types::{CreateTaskRequest, Task, TaskUpdate};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use log::info;
use std::sync::Arc;

use crate::shared::state::AppState;

/// The id segment is extracted as a raw string and parsed here so that a
/// non-numeric id yields 400 before the store is touched, never 404.
fn parse_task_id(raw: &str) -> Result<i64, TaskError> {
    raw.parse::<i64>()
        .map_err(|_| TaskError::InvalidId(raw.to_string()))
}

/// Handler for listing all tasks
pub async fn handle_task_list(State(state): State<Arc<AppState>>) -> Json<Vec<Task>> {
    let store = state.store.lock().await;
    Json(store.list())
}

/// Handler for getting a single task
pub async fn handle_task_get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Task>, TaskError> {
    let id = parse_task_id(&id)?;
    let store = state.store.lock().await;
    let task = store.get(id)?;
    Ok(Json(task))
}

/// Handler for task creation
pub async fn handle_task_create(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<Json<Task>, TaskError> {
    // Any malformed body maps to 400, not axum's default 422.
    let Json(payload) = payload.map_err(|e| TaskError::InvalidPayload(e.body_text()))?;
    let mut store = state.store.lock().await;
    let task = store.create(payload);
    info!("Created task {}: {}", task.id, task.title);
    Ok(Json(task))
}

/// Handler for task update
pub async fn handle_task_update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<TaskUpdate>, JsonRejection>,
) -> Result<Json<Task>, TaskError> {
    let id = parse_task_id(&id)?;
    let Json(payload) = payload.map_err(|e| TaskError::InvalidPayload(e.body_text()))?;
    let mut store = state.store.lock().await;
    let task = store.update(id, payload)?;
    Ok(Json(task))
}

/// Handler for task deletion
pub async fn handle_task_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, TaskError> {
    let id = parse_task_id(&id)?;
    let mut store = state.store.lock().await;
    store.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Configure task routes for the Axum router
pub fn configure_task_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tasks", post(handle_task_create))
        .route("/tasks", get(handle_task_list))
        .route("/tasks/:id", get(handle_task_get))
        .route("/tasks/:id", put(handle_task_update))
        .route("/tasks/:id", delete(handle_task_delete))
}
