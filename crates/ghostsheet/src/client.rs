//! The feed client

use ghostsheet_feed::{FeedDocument, FeedReconstructor, FeedResult, ReconstructOptions};

use crate::config::Config;
use crate::error::{GhostsheetError, Result};
use crate::source::FeedSource;

/// Reads cell feeds into typed records
///
/// Holds a validated [`Config`]; every call reconstructs from scratch and
/// nothing is kept between calls.
#[derive(Debug, Clone)]
pub struct Ghostsheet {
    config: Config,
    options: ReconstructOptions,
}

impl Ghostsheet {
    /// Create a client with the default configuration
    pub fn new() -> Self {
        let config = Config::default();
        let options = config.options();
        Self { config, options }
    }

    /// Create a client with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let options = config.to_options()?;
        Ok(Self { config, options })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the configuration
    ///
    /// On error the previous configuration stays in effect.
    pub fn set_config(&mut self, config: Config) -> Result<()> {
        self.options = config.to_options()?;
        self.config = config;
        Ok(())
    }

    /// Decode a JSON payload and reconstruct it
    pub fn parse(&self, payload: &str) -> Result<FeedResult> {
        let document = FeedDocument::from_json_str(payload)?;
        self.parse_document(&document)
    }

    /// Reconstruct an already decoded document
    pub fn parse_document(&self, document: &FeedDocument) -> Result<FeedResult> {
        let result = FeedReconstructor::new(&self.options).reconstruct_document(document)?;
        Ok(result)
    }

    /// Fetch the feed stored under `key` and reconstruct it
    pub fn get<S: FeedSource + ?Sized>(&self, source: &S, key: &str) -> Result<FeedResult> {
        log::debug!("Fetching feed '{key}'");

        let payload = source.fetch(key).map_err(|source| GhostsheetError::Source {
            key: key.to_string(),
            source,
        })?;

        FeedDocument::from_json_str(&payload)
            .and_then(|document| FeedReconstructor::new(&self.options).reconstruct_document(&document))
            .map_err(|source| GhostsheetError::Load {
                key: key.to_string(),
                source,
            })
    }
}

impl Default for Ghostsheet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{MemorySource, SourceError};
    use ghostsheet_feed::Strictness;

    const FEED: &str = r#"{"feed": {
        "id": {"$t": "feed-1"}, "updated": {"$t": "2013-05-02T08:15:00Z"}, "title": {"$t": "Sheet1"},
        "entry": [
            {"title": {"$t": "A1"}, "content": {"$t": "Name"}},
            {"title": {"$t": "A2"}, "content": {"$t": "Alice"}},
            {"title": {"$t": "B2"}, "content": {"$t": "orphan"}}
        ]
    }}"#;

    #[test]
    fn test_set_config_keeps_previous_on_error() {
        let mut client = Ghostsheet::new();
        let invalid = Config {
            types: Vec::new(),
            ..Config::default()
        };

        assert!(client.set_config(invalid).is_err());
        assert_eq!(client.config(), &Config::default());
    }

    #[test]
    fn test_set_config_applies() {
        let mut client = Ghostsheet::new();
        assert!(client.parse(FEED).is_ok());

        client
            .set_config(Config {
                strictness: Strictness::Strict,
                ..Config::default()
            })
            .unwrap();

        let err = client.parse(FEED).unwrap_err();
        assert!(err.feed_error().is_some());
    }

    #[test]
    fn test_get_wraps_errors_with_key() {
        let client = Ghostsheet::new();
        let source = MemorySource::new().with_feed("broken", "{\"feed\": 1}");

        let err = client.get(&source, "missing").unwrap_err();
        assert!(matches!(
            err,
            GhostsheetError::Source { ref key, source: SourceError::NotFound(_) } if key == "missing"
        ));

        let err = client.get(&source, "broken").unwrap_err();
        assert!(err.to_string().contains("'broken'"));
        assert!(err.feed_error().is_some_and(|e| e.is_structure()));
    }
}
