use thiserror::Error;

use super::status::StatusError;
use crate::ordering::KeySpaceExhausted;

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Task {id} is malformed: {reason}")]
    MalformedTask { id: String, reason: String },

    #[error("Task {0} not found")]
    TaskNotFound(String),

    #[error("Invalid task id: {0}")]
    InvalidTaskId(String),

    #[error("Task title is required")]
    TitleRequired,

    #[error("Task title must be a single line")]
    InvalidTitle,

    #[error("Invalid status: {0}")]
    InvalidStatus(#[from] StatusError),

    #[error("Target index {index} is out of range for a column of {len} tasks")]
    InvalidIndex { index: usize, len: usize },

    #[error("Column '{0}' changed since it was read")]
    StaleView(String),

    #[error("Task {0} moved concurrently")]
    Conflict(String),

    #[error("Order keys exhausted: {0}")]
    KeySpaceExhausted(#[from] KeySpaceExhausted),
}

impl From<mdstore::StoreError> for TaskError {
    fn from(err: mdstore::StoreError) -> Self {
        match err {
            mdstore::StoreError::IoError(e) => TaskError::IoError(e),
            mdstore::StoreError::NotFound(id) => TaskError::TaskNotFound(id),
            mdstore::StoreError::InvalidStatus { status, allowed } => {
                TaskError::InvalidStatus(StatusError { status, allowed })
            }
            other => TaskError::StorageError(other.to_string()),
        }
    }
}
