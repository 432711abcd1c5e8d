use std::path::Path;
use tracing::debug;

use super::{ConfigError, DaemonConfig};

/// Parse and validate config TOML.
pub fn parse_config(content: &str) -> Result<DaemonConfig, ConfigError> {
    let config: DaemonConfig = toml::from_str(content)?;
    config.board.validate()?;
    Ok(config)
}

/// Load the daemon configuration from `path`.
///
/// Returns `Ok(DaemonConfig::default())` if the file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file exists but cannot be read, parsed or
/// validated.
pub fn load_config(path: &Path) -> Result<DaemonConfig, ConfigError> {
    if !path.exists() {
        debug!("Config not found at {}; using defaults", path.display());
        return Ok(DaemonConfig::default());
    }
    let content = std::fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}
