//! The task board: tasks in status columns, ordered with [`crate::ordering`].

mod error;
mod locks;
mod service;
mod status;
pub mod store;
mod types;

pub use error::TaskError;
pub use locks::{GroupGuard, GroupLocks};
pub use service::Board;
pub use status::{resolve_status, StatusError};
pub use store::{FileTaskStore, MemoryTaskStore, TaskStore};
pub use types::{
    CreateTaskOptions, GroupSummary, ReorderTaskOptions, ReorderTaskResult, Task, TaskFilter,
    NewTask, UpdateTaskOptions,
};
