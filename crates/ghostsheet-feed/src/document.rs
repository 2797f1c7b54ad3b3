//! Decoded cell feed documents
//!
//! The feed is JSON shaped like:
//!
//! ```json
//! {"feed": {
//!     "id": {"$t": "https://example.test/feeds/cells/key/od6"},
//!     "updated": {"$t": "2013-05-02T08:15:00.000Z"},
//!     "title": {"$t": "Sheet1"},
//!     "entry": [
//!         {"title": {"$t": "A1"}, "content": {"$t": "Name"}},
//!         {"title": {"$t": "A2"}, "content": {"$t": "Alice"}}
//!     ]
//! }}
//! ```
//!
//! Fields other than these are ignored. `entry` is kept undecoded here so
//! that a missing or non-list entry collection surfaces as a structure
//! error at reconstruction time.

use crate::error::{FeedError, FeedOutcome};
use serde::Deserialize;
use std::io::Read;

/// A wrapped text value (`{"$t": "..."}`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TextNode {
    #[serde(rename = "$t")]
    pub text: String,
}

impl TextNode {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self { text: text.into() }
    }
}

/// A decoded feed document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeedDocument {
    pub feed: Feed,
}

/// The `feed` object of a document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Feed {
    pub id: TextNode,
    pub updated: TextNode,
    pub title: TextNode,
    /// Cell entries; anything but a list is rejected when read
    #[serde(default)]
    pub entry: Option<serde_json::Value>,
}

/// Identifying fields of a feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedMeta {
    pub id: String,
    pub updated: String,
    pub title: String,
}

/// One feed entry: a cell's position label and raw text
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "CellEntry")]
pub struct RawCell {
    /// A1-style position label (e.g., "C12")
    pub position: String,
    /// Raw text content, possibly empty
    pub content: String,
}

#[derive(Deserialize)]
struct CellEntry {
    title: TextNode,
    content: TextNode,
}

impl From<CellEntry> for RawCell {
    fn from(entry: CellEntry) -> Self {
        RawCell {
            position: entry.title.text,
            content: entry.content.text,
        }
    }
}

impl RawCell {
    pub fn new<P: Into<String>, C: Into<String>>(position: P, content: C) -> Self {
        Self {
            position: position.into(),
            content: content.into(),
        }
    }
}

impl FeedDocument {
    /// Decode a document from JSON text
    pub fn from_json_str(json: &str) -> FeedOutcome<Self> {
        serde_json::from_str(json).map_err(decode_error)
    }

    /// Decode a document from JSON bytes
    pub fn from_slice(bytes: &[u8]) -> FeedOutcome<Self> {
        serde_json::from_slice(bytes).map_err(decode_error)
    }

    /// Decode a document from a reader
    pub fn from_reader<R: Read>(reader: R) -> FeedOutcome<Self> {
        serde_json::from_reader(reader).map_err(decode_error)
    }
}

impl Feed {
    pub fn meta(&self) -> FeedMeta {
        FeedMeta {
            id: self.id.text.clone(),
            updated: self.updated.text.clone(),
            title: self.title.text.clone(),
        }
    }

    /// Read the cell entries, in document order
    ///
    /// Fails when `entry` is absent, null or anything but a list, or when
    /// one of its items lacks a `title`/`content` text.
    pub fn entries(&self) -> FeedOutcome<Vec<RawCell>> {
        let feed = Some(self.id.text.as_str());
        let items = match &self.entry {
            Some(serde_json::Value::Array(items)) => items,
            Some(_) => return Err(FeedError::structure(feed, "feed.entry is not a list")),
            None => return Err(FeedError::structure(feed, "feed.entry is missing")),
        };

        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                RawCell::deserialize(item).map_err(|e| {
                    FeedError::structure(feed, format!("feed.entry[{index}] is not a cell: {e}"))
                })
            })
            .collect()
    }
}

fn decode_error(err: serde_json::Error) -> FeedError {
    if err.is_data() {
        FeedError::structure(None, err.to_string())
    } else {
        FeedError::Decode(err)
    }
}
