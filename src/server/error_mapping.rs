use crate::board::TaskError;

/// Maps domain errors to stable API error codes and an optional hint.
pub trait ToStructuredError {
    fn error_code_and_tip(&self) -> (&str, Option<&str>);
}

impl ToStructuredError for TaskError {
    fn error_code_and_tip(&self) -> (&str, Option<&str>) {
        match self {
            TaskError::IoError(_) => ("IO_ERROR", None),
            TaskError::StorageError(_) => ("STORAGE_ERROR", None),
            TaskError::MalformedTask { .. } => (
                "MALFORMED_TASK",
                Some("Fix or remove the task file by hand"),
            ),
            TaskError::TaskNotFound(_) => ("TASK_NOT_FOUND", None),
            TaskError::InvalidTaskId(_) => ("INVALID_TASK_ID", Some("Task ids are UUIDs")),
            TaskError::TitleRequired => ("TITLE_REQUIRED", Some("Provide a non-empty title")),
            TaskError::InvalidTitle => (
                "INVALID_TITLE",
                Some("Put extra lines in the description"),
            ),
            TaskError::InvalidStatus(_) => (
                "INVALID_STATUS",
                Some("Use ListGroups to see the configured statuses"),
            ),
            TaskError::InvalidIndex { .. } => ("INVALID_INDEX", None),
            TaskError::StaleView(_) => (
                "STALE_VIEW",
                Some("Refresh the column and retry the move"),
            ),
            TaskError::Conflict(_) => ("CONFLICT", Some("Retry the request")),
            TaskError::KeySpaceExhausted(_) => (
                "KEY_SPACE_EXHAUSTED",
                Some("Lower the number of tasks in the column or raise the configured gap"),
            ),
        }
    }
}
