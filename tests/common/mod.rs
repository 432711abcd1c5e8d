//! Common test utilities

use std::path::Path;
use taskboard_daemon::{Board, BoardSettings, CreateTaskOptions, FileTaskStore, Task, TaskStore};
use tempfile::TempDir;

/// Create a temporary directory for testing
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Open a board backed by task files under `data_dir`
pub async fn open_file_board(data_dir: &Path) -> Board<FileTaskStore> {
    let settings = BoardSettings::default();
    let store = FileTaskStore::open(data_dir, &settings)
        .await
        .expect("Failed to open task store");
    Board::new(store, settings)
}

/// Create a task with the given title in `status`
pub async fn add_task<S: TaskStore>(board: &Board<S>, title: &str, status: &str) -> Task {
    board
        .create_task(CreateTaskOptions {
            title: title.to_string(),
            status: Some(status.to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to create task")
}

/// Titles of a column in order
#[allow(dead_code)] // Not every test binary uses it
pub async fn column_titles<S: TaskStore>(board: &Board<S>, status: &str) -> Vec<String> {
    board
        .group_tasks(status)
        .await
        .expect("Failed to read column")
        .into_iter()
        .map(|t| t.title)
        .collect()
}
