//! # ghostsheet
//!
//! Rebuild typed records from spreadsheet cell feeds.
//!
//! A cell feed lists a worksheet's cells as flat entries, each with an
//! A1-style position and its text. Row 1 declares the fields, optionally
//! with a type (`Age:int`, `Tags:array`, `Meta:json`), and every other row
//! becomes one record with its values coerced to those types.
//!
//! ## Features
//!
//! - Order-independent reconstruction (header cells may come last)
//! - Type coercion for `string`, `int`/`integer`, `number`, `array`,
//!   `bool`/`boolean` and `json` columns
//! - Optional null-filling of empty cells
//! - Feeds with a metadata row between header and data
//! - Tolerant or strict handling of cells that cannot be placed
//!
//! ## Example
//!
//! ```rust
//! use ghostsheet::prelude::*;
//!
//! let payload = r#"{"feed": {
//!     "id": {"$t": "people"},
//!     "updated": {"$t": "2013-05-02T08:15:00Z"},
//!     "title": {"$t": "Sheet1"},
//!     "entry": [
//!         {"title": {"$t": "A1"}, "content": {"$t": "Name"}},
//!         {"title": {"$t": "B1"}, "content": {"$t": "Age:int"}},
//!         {"title": {"$t": "A2"}, "content": {"$t": "Alice"}},
//!         {"title": {"$t": "B2"}, "content": {"$t": "30"}}
//!     ]
//! }}"#;
//!
//! let result = Ghostsheet::new().parse(payload).unwrap();
//! let alice = result.get(0).unwrap();
//! assert_eq!(alice["Name"], FieldValue::string("Alice"));
//! assert_eq!(alice["Age"], FieldValue::Integer(30));
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod prelude;
pub mod source;

pub use client::Ghostsheet;
pub use config::Config;
pub use error::{GhostsheetError, Result};
pub use source::{FeedSource, MemorySource, SourceError};

// Re-export core types
pub use ghostsheet_core::{
    coerce, CellPosition, Error as CoreError, FieldValue, HeaderLabel, HeaderMap, Record,
    TypeSet, TypeTag,
};

// Re-export feed types
pub use ghostsheet_feed::{
    Feed, FeedDocument, FeedError, FeedMeta, FeedOutcome, FeedReconstructor, FeedResult,
    HeaderOffset, Items, RawCell, ReconstructOptions, Strictness, TextNode,
};
