//! Error types for code generation.

use crate::collisions::NameCollision;
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Request loading error.
    #[error("request parse error: {0}")]
    Parse(#[from] querytype_catalog::ParseError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Two declarations share a name and collisions are denied.
    #[error("name collision: {0}")]
    NameCollision(NameCollision),
}
