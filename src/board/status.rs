//! Status column validation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid status '{status}'. Allowed: {allowed:?}")]
pub struct StatusError {
    pub status: String,
    pub allowed: Vec<String>,
}

/// Match `status` against the configured columns, ignoring ASCII case and
/// surrounding whitespace, and return the configured spelling.
pub fn resolve_status(status: &str, allowed: &[String]) -> Result<String, StatusError> {
    let wanted = status.trim();
    allowed
        .iter()
        .find(|s| s.eq_ignore_ascii_case(wanted))
        .cloned()
        .ok_or_else(|| StatusError {
            status: status.to_string(),
            allowed: allowed.to_vec(),
        })
}
