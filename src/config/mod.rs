//! Daemon configuration loaded from `~/.taskboard/config.toml`.
//!
//! The file is optional; every field falls back to its default.

mod loader;

pub use loader::{load_config, parse_config};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::ordering::{OrderKey, DEFAULT_GAP};
use crate::utils::taskboard_home;

/// Config file name inside `~/.taskboard`.
pub const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid board config: {0}")]
    Invalid(String),
}

fn default_gap() -> f64 {
    DEFAULT_GAP
}

fn default_statuses() -> Vec<String> {
    vec![
        "backlog".to_string(),
        "in-progress".to_string(),
        "completed".to_string(),
    ]
}

fn default_status() -> String {
    "backlog".to_string()
}

/// Board settings (`[board]` table).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BoardSettings {
    /// Spacing between neighbouring order keys.
    #[serde(default = "default_gap")]
    pub gap: f64,
    /// Status columns, left to right.
    #[serde(default = "default_statuses")]
    pub statuses: Vec<String>,
    /// Column new tasks land in when none is given.
    #[serde(default = "default_status")]
    pub default_status: String,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            gap: default_gap(),
            statuses: default_statuses(),
            default_status: default_status(),
        }
    }
}

impl BoardSettings {
    /// Check the settings describe a usable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !f64::is_valid_gap(self.gap) {
            return Err(ConfigError::Invalid(format!(
                "gap must be a positive finite number, got {}",
                self.gap
            )));
        }
        if self.statuses.is_empty() {
            return Err(ConfigError::Invalid("at least one status is required".to_string()));
        }
        for (i, status) in self.statuses.iter().enumerate() {
            if status.trim().is_empty() {
                return Err(ConfigError::Invalid("statuses cannot be blank".to_string()));
            }
            if status.trim() != status {
                return Err(ConfigError::Invalid(format!(
                    "status '{status}' has surrounding whitespace"
                )));
            }
            // Lookups ignore case, so names differing only in case collide.
            if self
                .statuses
                .iter()
                .skip(i.saturating_add(1))
                .any(|s| s.eq_ignore_ascii_case(status))
            {
                return Err(ConfigError::Invalid(format!("duplicate status '{status}'")));
            }
        }
        if !self.statuses.contains(&self.default_status) {
            return Err(ConfigError::Invalid(format!(
                "default_status '{}' is not one of {:?}",
                self.default_status, self.statuses
            )));
        }
        Ok(())
    }

    /// Position of a status column, if configured.
    #[must_use]
    pub fn status_rank(&self, status: &str) -> Option<usize> {
        self.statuses.iter().position(|s| s == status)
    }
}

/// Top-level daemon configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DaemonConfig {
    #[serde(default)]
    pub board: BoardSettings,
}

/// Default location of the config file.
#[must_use]
pub fn default_config_path() -> PathBuf {
    taskboard_home().join(CONFIG_FILENAME)
}
