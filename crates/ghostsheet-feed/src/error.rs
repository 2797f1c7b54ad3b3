//! Feed error types

use thiserror::Error;

/// Result type for feed operations
pub type FeedOutcome<T> = std::result::Result<T, FeedError>;

/// Errors that can occur while decoding or reconstructing a feed
#[derive(Debug, Error)]
pub enum FeedError {
    /// The document does not have the shape of a cell feed
    #[error("Malformed feed{}: {message}", feed_suffix(.feed))]
    Structure {
        feed: Option<String>,
        message: String,
    },

    /// The payload is not JSON at all
    #[error("Feed payload is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),

    /// A cell's content could not be coerced to its column type
    #[error("Feed {feed}: invalid value at {position}: {source}")]
    Coercion {
        feed: String,
        position: String,
        #[source]
        source: ghostsheet_core::Error,
    },

    /// Unparseable cell position (strict mode only)
    #[error("Feed {feed}: unparseable cell position {label:?}")]
    UnparseablePosition { feed: String, label: String },

    /// Data cell in a column without a header (strict mode only)
    #[error("Feed {feed}: no header for column of cell {position}")]
    UnresolvedColumn { feed: String, position: String },
}

impl FeedError {
    pub(crate) fn structure<S: Into<String>>(feed: Option<&str>, message: S) -> Self {
        FeedError::Structure {
            feed: feed.map(str::to_string),
            message: message.into(),
        }
    }

    /// Whether this is a structural error in the document itself
    pub fn is_structure(&self) -> bool {
        matches!(self, FeedError::Structure { .. })
    }
}

fn feed_suffix(feed: &Option<String>) -> String {
    feed.as_ref().map(|f| format!(" {f}")).unwrap_or_default()
}
