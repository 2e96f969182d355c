//! Types for the tasks module
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub status: String,
}

/// Payload for task creation. A client-supplied `id` field is ignored;
/// the store assigns ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub status: String,
}

/// Payload for task update. Title and status replace the stored values
/// wholesale; the id is never touched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskUpdate {
    pub title: String,
    pub status: String,
}
