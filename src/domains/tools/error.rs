//! Tool-specific error types.

use thiserror::Error;

/// Errors that escape a tool handler and become protocol-level errors.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Required arguments were missing or malformed.
    #[error("{0}")]
    InvalidArguments(String),

    /// The tool result could not be encoded.
    #[error("Failed to encode tool result: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl ToolError {
    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}
