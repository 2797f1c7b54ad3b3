//! Error types for ghostsheet-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ghostsheet-core
#[derive(Debug, Error)]
pub enum Error {
    /// Cell position label is not letters followed by a row number
    #[error("Invalid cell position: {0:?}")]
    InvalidPosition(String),

    /// Type token outside the known set of type tags
    #[error("Unknown type tag: {0:?}")]
    UnknownType(String),

    /// Cell content under a `json` column is not valid JSON
    #[error("Invalid JSON value: {0}")]
    Json(#[from] serde_json::Error),
}
