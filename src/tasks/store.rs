//! In-memory task store
use super::error::TaskError;
use super::types::{CreateTaskRequest, Task, TaskUpdate};

/// Ordered collection of tasks plus the next-id counter.
///
/// The store is plain data; all concurrent access goes through the
/// exclusive lock in `AppState`, so every method here runs with the
/// lock held for its entire duration.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: i64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Full sequence in insertion order.
    pub fn list(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    pub fn get(&self, id: i64) -> Result<Task, TaskError> {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(TaskError::NotFound)
    }

    /// Assigns the next id and appends. The only writer of `next_id`.
    pub fn create(&mut self, request: CreateTaskRequest) -> Task {
        let task = Task {
            id: self.next_id,
            title: request.title,
            status: request.status,
        };
        self.next_id += 1;
        self.tasks.push(task.clone());
        task
    }

    pub fn update(&mut self, id: i64, update: TaskUpdate) -> Result<Task, TaskError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskError::NotFound)?;
        task.title = update.title;
        task.status = update.status;
        Ok(task.clone())
    }

    /// Removes the task, preserving the order of the remaining tasks.
    pub fn delete(&mut self, id: i64) -> Result<(), TaskError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TaskError::NotFound)?;
        self.tasks.remove(index);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
