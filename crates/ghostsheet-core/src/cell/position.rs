//! Cell position type

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static POSITION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z]+)([0-9]+)$").expect("hardcoded position pattern"));

/// A cell position (e.g., "A1", "C12")
///
/// Positions come from the title of each feed entry. The column is kept as
/// its letter run: it is only ever used as a lookup key for the header row,
/// never for arithmetic, so no numeric column index is derived.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellPosition {
    /// Column letters (one or more of `A-Z`)
    pub column: String,
    /// Row number (1-based, as displayed)
    pub row: u32,
}

impl CellPosition {
    /// Create a new cell position
    pub fn new<S: Into<String>>(column: S, row: u32) -> Self {
        Self {
            column: column.into(),
            row,
        }
    }

    /// Parse a position from an A1-style label
    ///
    /// The whole label must be uppercase letters immediately followed by
    /// digits. Lowercase letters, `$` markers, surrounding whitespace and
    /// ranges are all rejected, as is row 0.
    ///
    /// # Examples
    /// ```
    /// use ghostsheet_core::CellPosition;
    ///
    /// let pos = CellPosition::parse("AB12").unwrap();
    /// assert_eq!(pos.column, "AB");
    /// assert_eq!(pos.row, 12);
    ///
    /// assert!(CellPosition::parse("b2").is_err());
    /// ```
    pub fn parse(label: &str) -> Result<Self> {
        let captures = POSITION_PATTERN
            .captures(label)
            .ok_or_else(|| Error::InvalidPosition(label.to_string()))?;

        let row: u32 = captures[2]
            .parse()
            .map_err(|_| Error::InvalidPosition(label.to_string()))?;

        if row == 0 {
            return Err(Error::InvalidPosition(label.to_string()));
        }

        Ok(Self {
            column: captures[1].to_string(),
            row,
        })
    }

    /// Whether this position lies in the header row (row 1)
    pub fn is_header(&self) -> bool {
        self.row == 1
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", self.column, self.row)
    }
}

impl fmt::Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

impl FromStr for CellPosition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
