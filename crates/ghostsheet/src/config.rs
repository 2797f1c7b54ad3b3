//! Client configuration
//!
//! ```rust
//! use ghostsheet::{Config, HeaderOffset};
//!
//! let config = Config::from_json_str(r#"{"nullfill": false, "header_offset": 2}"#).unwrap();
//! assert!(!config.nullfill);
//! assert_eq!(config.header_offset, HeaderOffset::WithMetadataRow);
//! assert_eq!(config.types.len(), 8);
//! ```

use ghostsheet_core::{TypeSet, TypeTag};
use ghostsheet_feed::{HeaderOffset, ReconstructOptions, Strictness};
use serde::Deserialize;

use crate::error::{GhostsheetError, Result};

/// Settings for reading feeds
///
/// Missing keys take their default when loaded from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Type tags a header may declare (default: all of them)
    pub types: Vec<TypeTag>,
    /// Map empty cells to null (default: true)
    pub nullfill: bool,
    /// Rows before the data, 1 or 2 (default: 1)
    pub header_offset: HeaderOffset,
    /// Handling of unplaceable cells (default: tolerant)
    pub strictness: Strictness,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            types: TypeTag::ALL.to_vec(),
            nullfill: true,
            header_offset: HeaderOffset::Basic,
            strictness: Strictness::Tolerant,
        }
    }
}

impl Config {
    /// Load a configuration from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can be used
    pub fn validate(&self) -> Result<()> {
        if self.types.is_empty() {
            return Err(GhostsheetError::InvalidConfig(
                "at least one type must be recognized".into(),
            ));
        }
        Ok(())
    }

    /// Build reconstruction options from this configuration
    pub fn to_options(&self) -> Result<ReconstructOptions> {
        self.validate()?;
        Ok(self.options())
    }

    pub(crate) fn options(&self) -> ReconstructOptions {
        ReconstructOptions::new(
            self.types.iter().copied().collect::<TypeSet>(),
            self.nullfill,
            self.header_offset,
            self.strictness,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.types, TypeTag::ALL.to_vec());
        assert!(config.nullfill);
        assert_eq!(config.header_offset, HeaderOffset::Basic);
        assert_eq!(config.strictness, Strictness::Tolerant);

        assert_eq!(Config::from_json_str("{}").unwrap(), config);
    }

    #[test]
    fn test_from_json() {
        let config = Config::from_json_str(
            r#"{"types": ["string", "int"], "nullfill": false, "header_offset": 2, "strictness": "strict"}"#,
        )
        .unwrap();

        assert_eq!(config.types, vec![TypeTag::String, TypeTag::Int]);
        assert!(!config.nullfill);
        assert_eq!(config.header_offset, HeaderOffset::WithMetadataRow);
        assert_eq!(config.strictness, Strictness::Strict);

        let options = config.to_options().unwrap();
        assert!(options.types.contains(TypeTag::Int));
        assert!(!options.types.contains(TypeTag::Json));
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            Config::from_json_str(r#"{"types": ["decimal"]}"#),
            Err(GhostsheetError::Config(_))
        ));
        assert!(matches!(
            Config::from_json_str(r#"{"header_offset": 3}"#),
            Err(GhostsheetError::Config(_))
        ));
        assert!(matches!(
            Config::from_json_str(r#"{"url": "https://example.test"}"#),
            Err(GhostsheetError::Config(_))
        ));
        assert!(matches!(
            Config::from_json_str(r#"{"types": []}"#),
            Err(GhostsheetError::InvalidConfig(_))
        ));
    }
}
