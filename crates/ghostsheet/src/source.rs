//! Feed sources
//!
//! A [`FeedSource`] hands over the raw JSON payload of a feed identified by
//! a key. Fetching over the network is left to implementors.

use std::collections::HashMap;
use thiserror::Error;

/// Errors a feed source can report
#[derive(Debug, Error)]
pub enum SourceError {
    /// Nothing is registered under the key
    #[error("no feed registered under '{0}'")]
    NotFound(String),

    /// Any other retrieval failure
    #[error("{0}")]
    Other(String),
}

/// Provider of raw feed payloads
pub trait FeedSource {
    /// Fetch the payload stored under `key`
    fn fetch(&self, key: &str) -> Result<String, SourceError>;
}

impl<S: FeedSource + ?Sized> FeedSource for &S {
    fn fetch(&self, key: &str) -> Result<String, SourceError> {
        (**self).fetch(key)
    }
}

/// In-memory feed source
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    feeds: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a feed, consuming and returning the source
    pub fn with_feed<K: Into<String>, P: Into<String>>(mut self, key: K, payload: P) -> Self {
        self.insert(key, payload);
        self
    }

    /// Add or replace a feed, returning the previous payload
    pub fn insert<K: Into<String>, P: Into<String>>(&mut self, key: K, payload: P) -> Option<String> {
        self.feeds.insert(key.into(), payload.into())
    }

    pub fn len(&self) -> usize {
        self.feeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.feeds.is_empty()
    }
}

impl FeedSource for MemorySource {
    fn fetch(&self, key: &str) -> Result<String, SourceError> {
        self.feeds
            .get(key)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source() {
        let mut source = MemorySource::new().with_feed("a", "{}");
        assert_eq!(source.len(), 1);
        assert_eq!(source.fetch("a").unwrap(), "{}");
        assert!(matches!(source.fetch("b"), Err(SourceError::NotFound(k)) if k == "b"));

        assert_eq!(source.insert("a", "[]"), Some("{}".to_string()));
        assert_eq!((&source).fetch("a").unwrap(), "[]");
    }
}
