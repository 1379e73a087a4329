//! Error types for loading generation requests.

use thiserror::Error;

/// Error type for request loading operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON decoding error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown query command tag.
    #[error("unknown command '{tag}' (expected :exec, :execrows, :one or :many)")]
    UnknownCommand {
        /// The tag as written in the request.
        tag: String,
    },

    /// Invalid request structure.
    #[error("invalid request structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Creates an unknown command error.
    pub fn unknown_command(tag: impl Into<String>) -> Self {
        Self::UnknownCommand { tag: tag.into() }
    }

    /// Creates an invalid structure error.
    pub fn invalid_structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}
