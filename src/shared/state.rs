use crate::tasks::TaskStore;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared application state handed to every handler.
///
/// The store sits behind a single exclusive lock; each operation holds
/// the lock for its entire duration, so store operations are totally
/// ordered by lock acquisition.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<TaskStore>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(Mutex::new(TaskStore::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
