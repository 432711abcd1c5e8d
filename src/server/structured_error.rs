use std::fmt::Display;

use serde::Serialize;

use crate::logging::get_log_file_path;
use crate::server::error_mapping::ToStructuredError;

#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    pub code: String,
}

/// JSON payload carried in the `error` field of every response.
#[derive(Debug, Serialize)]
pub struct StructuredError {
    /// Where the board's tasks live
    pub board: String,
    /// Daemon log file, empty when logging to a file is not set up
    pub logs: String,
    pub messages: Vec<ErrorMessage>,
}

const FALLBACK_JSON: &str =
    r#"{"board":"","logs":"","messages":[{"message":"serialization error","code":"INTERNAL_ERROR"}]}"#;

impl StructuredError {
    #[must_use]
    pub fn new(board: &str, code: &str, message: String) -> Self {
        Self {
            board: board.to_string(),
            logs: get_log_file_path().to_string(),
            messages: vec![ErrorMessage {
                message,
                tip: None,
                code: code.to_string(),
            }],
        }
    }

    #[must_use]
    pub fn with_tip(mut self, tip: &str) -> Self {
        if let Some(msg) = self.messages.first_mut() {
            msg.tip = Some(tip.to_string());
        }
        self
    }

    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| FALLBACK_JSON.to_string())
    }
}

/// Render a domain error as the JSON string put in a response's `error` field.
pub fn to_error_json<E: ToStructuredError + Display>(board: &str, err: &E) -> String {
    let (code, tip) = err.error_code_and_tip();
    let mut se = StructuredError::new(board, code, err.to_string());
    if let Some(tip) = tip {
        se = se.with_tip(tip);
    }
    se.to_json()
}

#[cfg(test)]
#[path = "structured_error_tests.rs"]
mod structured_error_tests;
