//! Persistence seam for tasks.

mod file;
mod memory;

pub use file::FileTaskStore;
pub use memory::MemoryTaskStore;

use async_trait::async_trait;

use super::error::TaskError;
use super::types::{NewTask, Task};

/// Where tasks are persisted.
///
/// Stores own ids and timestamps; ordering, locking and validation live in
/// [`Board`](super::Board).
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Human-readable location of the stored tasks, reported in API errors.
    fn location(&self) -> String;

    /// Store a new task and return it with its id and timestamps.
    async fn create(&self, task: NewTask) -> Result<Task, TaskError>;

    /// Load one task, `None` if it does not exist.
    async fn load(&self, id: &str) -> Result<Option<Task>, TaskError>;

    /// Load every task, in no particular order.
    async fn load_all(&self) -> Result<Vec<Task>, TaskError>;

    /// Overwrite an existing task's content, status, order and assignee.
    /// Returns the task as stored, with `updated_at` refreshed.
    async fn update(&self, task: &Task) -> Result<Task, TaskError>;

    /// Update a batch of tasks, e.g. a renumbered column.
    async fn update_all(&self, tasks: &[Task]) -> Result<Vec<Task>, TaskError> {
        let mut stored = Vec::with_capacity(tasks.len());
        for task in tasks {
            stored.push(self.update(task).await?);
        }
        Ok(stored)
    }

    /// Remove a task. Returns whether it existed.
    async fn remove(&self, id: &str) -> Result<bool, TaskError>;
}
