//! Reconstruction options

use ghostsheet_core::TypeSet;
use serde::Deserialize;

/// Rows that precede the data
///
/// Row 1 always holds the header. Some feed variants place a metadata row
/// between the header and the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u32")]
pub enum HeaderOffset {
    /// Header in row 1, data from row 2
    Basic,
    /// Header in row 1, metadata in row 2, data from row 3
    WithMetadataRow,
}

impl HeaderOffset {
    /// Number of rows before the first data row
    pub fn rows(self) -> u32 {
        match self {
            HeaderOffset::Basic => 1,
            HeaderOffset::WithMetadataRow => 2,
        }
    }

    /// Zero-based record index for a (1-based) sheet row
    ///
    /// Returns `None` for rows that are not data rows.
    pub fn record_index(self, row: u32) -> Option<usize> {
        row.checked_sub(self.rows() + 1).map(|index| index as usize)
    }
}

impl TryFrom<u32> for HeaderOffset {
    type Error = String;

    fn try_from(rows: u32) -> Result<Self, Self::Error> {
        match rows {
            1 => Ok(HeaderOffset::Basic),
            2 => Ok(HeaderOffset::WithMetadataRow),
            other => Err(format!("header offset must be 1 or 2, got {other}")),
        }
    }
}

/// How cells that cannot be placed are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Skip unparseable positions and cells in header-less columns
    Tolerant,
    /// Fail the whole reconstruction on either
    Strict,
}

/// Options for reconstructing a feed
///
/// Has no `Default`; every setting comes from the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconstructOptions {
    /// Type tags a header may declare
    pub types: TypeSet,
    /// Map empty cell text to null
    pub nullfill: bool,
    /// Rows before the data
    pub header_offset: HeaderOffset,
    /// Handling of unplaceable cells
    pub strictness: Strictness,
}

impl ReconstructOptions {
    pub fn new(
        types: TypeSet,
        nullfill: bool,
        header_offset: HeaderOffset,
        strictness: Strictness,
    ) -> Self {
        Self {
            types,
            nullfill,
            header_offset,
            strictness,
        }
    }

    pub(crate) fn is_strict(&self) -> bool {
        self.strictness == Strictness::Strict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_index() {
        assert_eq!(HeaderOffset::Basic.record_index(1), None);
        assert_eq!(HeaderOffset::Basic.record_index(2), Some(0));
        assert_eq!(HeaderOffset::Basic.record_index(3), Some(1));

        assert_eq!(HeaderOffset::WithMetadataRow.record_index(1), None);
        assert_eq!(HeaderOffset::WithMetadataRow.record_index(2), None);
        assert_eq!(HeaderOffset::WithMetadataRow.record_index(3), Some(0));
        assert_eq!(HeaderOffset::WithMetadataRow.record_index(10), Some(7));
    }

    #[test]
    fn test_offset_from_rows() {
        assert_eq!(HeaderOffset::try_from(1), Ok(HeaderOffset::Basic));
        assert_eq!(HeaderOffset::try_from(2), Ok(HeaderOffset::WithMetadataRow));
        assert!(HeaderOffset::try_from(0).is_err());
        assert!(HeaderOffset::try_from(3).is_err());
    }

    #[test]
    fn test_deserialize() {
        let offset: HeaderOffset = serde_json::from_str("2").unwrap();
        assert_eq!(offset, HeaderOffset::WithMetadataRow);
        assert!(serde_json::from_str::<HeaderOffset>("5").is_err());

        let strictness: Strictness = serde_json::from_str(r#""strict""#).unwrap();
        assert_eq!(strictness, Strictness::Strict);
        assert!(serde_json::from_str::<Strictness>(r#""lenient""#).is_err());
    }
}
