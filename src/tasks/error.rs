use axum::http::StatusCode;
use axum::response::IntoResponse;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TaskError {
    #[error("Task not found")]
    NotFound,
    #[error("Invalid task ID: {0}")]
    InvalidId(String),
    #[error("Invalid input: {0}")]
    InvalidPayload(String),
}

impl IntoResponse for TaskError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidId(_) | Self::InvalidPayload(_) => StatusCode::BAD_REQUEST,
        };
        // Plain-text error bodies; only successful responses carry JSON.
        (status, self.to_string()).into_response()
    }
}
