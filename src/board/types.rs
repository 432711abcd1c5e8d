//! Task types and the options of board operations.

use std::cmp::Ordering;

use crate::ordering::Orderable;

/// A task card on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// UUID assigned by the store
    pub id: String,
    pub title: String,
    pub description: String,
    /// Status column the task sits in; its ordering group
    pub status: String,
    /// Order key within `status`
    pub order: f64,
    pub assignee: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Orderable for Task {
    type Key = f64;
    type Id = str;

    fn order_key(&self) -> f64 {
        self.order
    }

    fn item_id(&self) -> &str {
        &self.id
    }

    fn tie_break(&self, other: &Self) -> Ordering {
        self.created_at
            .cmp(&other.created_at)
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// A task about to be stored. The store assigns its id and timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub status: String,
    pub order: f64,
    pub assignee: Option<String>,
}

/// Options for creating a task
#[derive(Debug, Clone, Default)]
pub struct CreateTaskOptions {
    pub title: String,
    pub description: String,
    /// None = configured default status
    pub status: Option<String>,
    pub assignee: Option<String>,
}

/// Options for updating a task. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateTaskOptions {
    pub title: Option<String>,
    pub description: Option<String>,
    /// A new status moves the task to the tail of that column
    pub status: Option<String>,
    /// `Some("")` clears the assignee
    pub assignee: Option<String>,
}

/// A drag-and-drop request.
#[derive(Debug, Clone, Default)]
pub struct ReorderTaskOptions {
    /// Destination column; may be the task's current one
    pub group: String,
    /// Zero-based index, counted as if the task had been removed first
    pub target_index: usize,
    /// Ids the client saw in the destination column, moved task excluded.
    /// Empty skips the stale-view check.
    pub expected_task_ids: Vec<String>,
}

/// Result of a reorder
#[derive(Debug, Clone)]
pub struct ReorderTaskResult {
    pub task: Task,
    /// Whether the destination column had to be renumbered first
    pub renumbered: bool,
}

/// Filters for listing tasks
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub status: Option<String>,
    pub assignee: Option<String>,
}

/// A status column and how many tasks it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    pub id: String,
    pub task_count: usize,
}
