//! Health check handler

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

use crate::shared::state::AppState;

pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<serde_json::Value>) {
    let task_count = state.store.lock().await.len();

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ok",
            "service": "taskserver",
            "version": env!("CARGO_PKG_VERSION"),
            "tasks": task_count
        })),
    )
}
