//! Tracing setup: stdout plus a rolling log file.

mod init;

pub use init::{init_logging, parse_rotation};

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::Level;
use tracing_appender::rolling::Rotation;

use crate::utils::taskboard_home;

/// Log filename used by the daemon.
pub const LOG_FILENAME: &str = "taskboard-daemon.log";

/// Crate target the default filter applies to.
const LOG_TARGET: &str = "taskboard_daemon";

static LOG_FILE_PATH: OnceLock<String> = OnceLock::new();

/// Remember where logs go so API errors can point at them.
pub fn set_log_file_path(path: String) {
    // Only the first call wins; later ones are no-ops
    let _ = LOG_FILE_PATH.set(path);
}

/// Log file path recorded at startup, or `""` before logging is set up.
#[must_use]
pub fn get_log_file_path() -> &'static str {
    LOG_FILE_PATH.get().map_or("", String::as_str)
}

/// Configuration for the logging system.
#[derive(Debug)]
pub struct LogConfig {
    pub log_dir: PathBuf,
    /// Level for this crate when `RUST_LOG` is unset
    pub log_level: Level,
    pub json_format: bool,
    pub rotation: Rotation,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: taskboard_home().join("logs"),
            log_level: Level::INFO,
            json_format: false,
            rotation: Rotation::DAILY,
        }
    }
}

impl LogConfig {
    /// Path of the (unrotated) log file.
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        log_file_in(&self.log_dir)
    }

    /// Filter directive used when `RUST_LOG` is unset.
    #[must_use]
    pub fn default_directive(&self) -> String {
        format!("{LOG_TARGET}={}", self.log_level)
    }
}

fn log_file_in(dir: &Path) -> PathBuf {
    dir.join(LOG_FILENAME)
}
