//! # ghostsheet-core
//!
//! Core types for rebuilding typed records from a spreadsheet cell feed.
//!
//! This crate provides:
//! - [`CellPosition`] - A cell's coordinate, parsed from labels like "B3"
//! - [`HeaderLabel`], [`TypeTag`] and [`HeaderMap`] - Field declarations from the header row
//! - [`FieldValue`] and [`Record`] - Coerced values and the rows holding them
//! - [`coerce`] - Conversion of raw cell text into a declared type
//!
//! ## Example
//!
//! ```rust
//! use ghostsheet_core::{coerce, CellPosition, FieldValue, HeaderLabel, TypeSet, TypeTag};
//!
//! let position = CellPosition::parse("B2").unwrap();
//! assert_eq!(position.column, "B");
//! assert_eq!(position.row, 2);
//!
//! let label = HeaderLabel::parse("Age:int", &TypeSet::all());
//! assert_eq!(label.kind, TypeTag::Int);
//!
//! let value = coerce("30", label.kind, true).unwrap();
//! assert_eq!(value, FieldValue::Integer(30));
//! ```

pub mod cell;
pub mod coerce;
pub mod error;
pub mod header;

// Re-exports for convenience
pub use cell::{CellPosition, FieldValue, Record};
pub use coerce::coerce;
pub use error::{Error, Result};
pub use header::{HeaderLabel, HeaderMap, TypeSet, TypeTag};
