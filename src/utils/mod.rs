use std::path::{Path, PathBuf};

/// Name of the per-user taskboard folder under the home directory.
pub const TASKBOARD_FOLDER: &str = ".taskboard";

/// Folder inside a data directory that holds one file per task.
pub const TASKS_FOLDER: &str = "tasks";

/// `~/.taskboard`, or `./.taskboard` when no home directory is known.
#[must_use]
pub fn taskboard_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(TASKBOARD_FOLDER)
}

/// Get the folder holding task files for a data directory.
#[must_use]
pub fn get_tasks_path(data_dir: &Path) -> PathBuf {
    data_dir.join(TASKS_FOLDER)
}

/// Get current timestamp in ISO 8601 format
#[must_use]
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_tasks_path() {
        let data_dir = Path::new("/home/user/.taskboard/board");
        assert_eq!(
            get_tasks_path(data_dir),
            Path::new("/home/user/.taskboard/board/tasks")
        );
    }

    #[test]
    fn test_taskboard_home_ends_with_folder() {
        assert!(taskboard_home().ends_with(TASKBOARD_FOLDER));
    }

    #[test]
    fn test_now_iso_parses_back() {
        let now = now_iso();
        assert!(chrono::DateTime::parse_from_rfc3339(&now).is_ok());
    }
}
