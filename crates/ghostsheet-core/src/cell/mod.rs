//! Cell-related types
//!
//! This module contains:
//! - [`CellPosition`] - A cell's location (e.g., "B3")
//! - [`FieldValue`] - A cell's content after coercion
//! - [`Record`] - One reconstructed row

mod position;
mod value;

pub use position::CellPosition;
pub use value::{FieldValue, Record};
