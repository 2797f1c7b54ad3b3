//! Error types for ghostsheet

use ghostsheet_feed::FeedError;
use thiserror::Error;

use crate::source::SourceError;

/// Result type alias using [`GhostsheetError`]
pub type Result<T> = std::result::Result<T, GhostsheetError>;

/// Errors returned by the [`Ghostsheet`](crate::Ghostsheet) client
#[derive(Debug, Error)]
pub enum GhostsheetError {
    /// Decoding or reconstruction failed
    #[error(transparent)]
    Feed(#[from] FeedError),

    /// Decoding or reconstruction of a fetched feed failed
    #[error("Failed to load feed '{key}': {source}")]
    Load {
        key: String,
        #[source]
        source: FeedError,
    },

    /// The feed source could not provide the payload
    #[error("Failed to fetch feed '{key}': {source}")]
    Source {
        key: String,
        #[source]
        source: SourceError,
    },

    /// Configuration text could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Configuration values are unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GhostsheetError {
    /// The underlying feed error, if any
    pub fn feed_error(&self) -> Option<&FeedError> {
        match self {
            GhostsheetError::Feed(e) | GhostsheetError::Load { source: e, .. } => Some(e),
            _ => None,
        }
    }
}
