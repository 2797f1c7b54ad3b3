//! # ghostsheet-feed
//!
//! Decoding of spreadsheet cell feeds and reconstruction of their rows.
//!
//! A cell feed lists every non-empty cell of a worksheet as a flat entry
//! carrying its position ("B3") and its text. Row 1 declares the fields;
//! [`FeedReconstructor`] turns the remaining cells into typed records.

mod document;
mod error;
mod options;
mod reconstruct;
mod result;

pub use document::{Feed, FeedDocument, FeedMeta, RawCell, TextNode};
pub use error::{FeedError, FeedOutcome};
pub use options::{HeaderOffset, ReconstructOptions, Strictness};
pub use reconstruct::FeedReconstructor;
pub use result::{FeedResult, Items};
