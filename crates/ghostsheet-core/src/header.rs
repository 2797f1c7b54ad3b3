//! Header row labels
//!
//! Every cell in row 1 declares a field. Its content is either a plain
//! field name (`Title`) or a name and a type joined by a colon
//! (`Price:number`).

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{btree_map, BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

static HEADER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Za-z0-9_]+):([A-Za-z0-9_]+)").expect("hardcoded header pattern")
});

/// Declared type of a column
///
/// `Int`/`Integer` and `Bool`/`Boolean` are aliases that coerce
/// identically; the spelling used in the header is kept for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeTag {
    String,
    Int,
    Integer,
    Number,
    Array,
    Bool,
    Boolean,
    Json,
}

impl TypeTag {
    /// Every type tag, in declaration order
    pub const ALL: [TypeTag; 8] = [
        TypeTag::String,
        TypeTag::Int,
        TypeTag::Integer,
        TypeTag::Number,
        TypeTag::Array,
        TypeTag::Bool,
        TypeTag::Boolean,
        TypeTag::Json,
    ];

    /// The token used for this tag in header labels
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::String => "string",
            TypeTag::Int => "int",
            TypeTag::Integer => "integer",
            TypeTag::Number => "number",
            TypeTag::Array => "array",
            TypeTag::Bool => "bool",
            TypeTag::Boolean => "boolean",
            TypeTag::Json => "json",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = Error;

    /// Tokens are case-sensitive: `Int` is not a type tag.
    fn from_str(s: &str) -> Result<Self> {
        TypeTag::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| Error::UnknownType(s.to_string()))
    }
}

impl Serialize for TypeTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TypeTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}

/// The set of type tags a header may declare
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeSet(BTreeSet<TypeTag>);

impl TypeSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set holding every type tag
    pub fn all() -> Self {
        TypeTag::ALL.into_iter().collect()
    }

    /// Add a tag, returning whether it was newly added
    pub fn insert(&mut self, tag: TypeTag) -> bool {
        self.0.insert(tag)
    }

    /// Check if a tag is in the set
    pub fn contains(&self, tag: TypeTag) -> bool {
        self.0.contains(&tag)
    }

    /// Resolve a header type token against the set
    pub fn recognize(&self, token: &str) -> Option<TypeTag> {
        token.parse().ok().filter(|tag| self.contains(*tag))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = TypeTag> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<TypeTag> for TypeSet {
    fn from_iter<I: IntoIterator<Item = TypeTag>>(iter: I) -> Self {
        TypeSet(iter.into_iter().collect())
    }
}

/// A field declaration taken from one header cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderLabel {
    /// Field name used as the record key
    pub name: String,
    /// Declared type of the column
    #[serde(rename = "type")]
    pub kind: TypeTag,
}

impl HeaderLabel {
    /// Create a new header label
    pub fn new<S: Into<String>>(name: S, kind: TypeTag) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Create a string-typed label
    pub fn plain<S: Into<String>>(name: S) -> Self {
        Self::new(name, TypeTag::String)
    }

    /// Resolve a header cell's content into a label
    ///
    /// The first `word:word` run in the content is taken as name and type.
    /// When there is no such run, or its type is not in `types`, the whole
    /// content becomes the name (verbatim, colon included) and the type is
    /// `string`.
    ///
    /// # Examples
    /// ```
    /// use ghostsheet_core::{HeaderLabel, TypeSet, TypeTag};
    ///
    /// let types = TypeSet::all();
    /// assert_eq!(HeaderLabel::parse("Age:int", &types), HeaderLabel::new("Age", TypeTag::Int));
    /// assert_eq!(HeaderLabel::parse("Age:bogus", &types), HeaderLabel::plain("Age:bogus"));
    /// ```
    pub fn parse(content: &str, types: &TypeSet) -> Self {
        HEADER_PATTERN
            .captures(content)
            .and_then(|captures| {
                let kind = types.recognize(&captures[2])?;
                Some(Self::new(&captures[1], kind))
            })
            .unwrap_or_else(|| Self::plain(content))
    }
}

/// Column letters to header label, built from row 1
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HeaderMap(BTreeMap<String, HeaderLabel>);

impl HeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a column's label; a later label for the same column wins
    pub fn insert<S: Into<String>>(&mut self, column: S, label: HeaderLabel) -> Option<HeaderLabel> {
        self.0.insert(column.into(), label)
    }

    /// Look up the label for a column
    pub fn get(&self, column: &str) -> Option<&HeaderLabel> {
        self.0.get(column)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, HeaderLabel> {
        self.0.iter()
    }
}

impl FromIterator<(String, HeaderLabel)> for HeaderMap {
    fn from_iter<I: IntoIterator<Item = (String, HeaderLabel)>>(iter: I) -> Self {
        HeaderMap(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_type_tag_tokens() {
        for tag in TypeTag::ALL {
            assert_eq!(tag.as_str().parse::<TypeTag>().unwrap(), tag);
        }
        assert!("Int".parse::<TypeTag>().is_err());
        assert!("float".parse::<TypeTag>().is_err());
    }

    #[test]
    fn test_type_tag_serde() {
        let tags: Vec<TypeTag> = serde_json::from_str(r#"["int", "json"]"#).unwrap();
        assert_eq!(tags, vec![TypeTag::Int, TypeTag::Json]);
        assert!(serde_json::from_str::<Vec<TypeTag>>(r#"["decimal"]"#).is_err());
        assert_eq!(
            serde_json::to_string(&TypeTag::Boolean).unwrap(),
            r#""boolean""#
        );
    }

    #[test]
    fn test_header_parse() {
        let types = TypeSet::all();

        assert_eq!(
            HeaderLabel::parse("Name:int", &types),
            HeaderLabel::new("Name", TypeTag::Int)
        );
        assert_eq!(
            HeaderLabel::parse("tags:array", &types),
            HeaderLabel::new("tags", TypeTag::Array)
        );
        assert_eq!(
            HeaderLabel::parse("Name:bogus", &types),
            HeaderLabel::plain("Name:bogus")
        );
        assert_eq!(
            HeaderLabel::parse("PlainLabel", &types),
            HeaderLabel::plain("PlainLabel")
        );
        assert_eq!(HeaderLabel::parse("", &types), HeaderLabel::plain(""));
    }

    #[test]
    fn test_header_parse_keeps_content_verbatim() {
        let types = TypeSet::all();

        assert_eq!(
            HeaderLabel::parse("  Padded  ", &types),
            HeaderLabel::plain("  Padded  ")
        );
        assert_eq!(
            HeaderLabel::parse("Time: 10:30", &types),
            HeaderLabel::plain("Time: 10:30")
        );
        // Type tokens are case-sensitive
        assert_eq!(
            HeaderLabel::parse("Count:Int", &types),
            HeaderLabel::plain("Count:Int")
        );
    }

    #[test]
    fn test_header_parse_takes_first_word_pair() {
        let types = TypeSet::all();

        assert_eq!(
            HeaderLabel::parse("Unit Price:number", &types),
            HeaderLabel::new("Price", TypeTag::Number)
        );
        assert_eq!(
            HeaderLabel::parse("meta:json (raw)", &types),
            HeaderLabel::new("meta", TypeTag::Json)
        );
    }

    #[test]
    fn test_header_parse_restricted_types() {
        let types: TypeSet = [TypeTag::String, TypeTag::Int].into_iter().collect();

        assert_eq!(
            HeaderLabel::parse("Age:int", &types),
            HeaderLabel::new("Age", TypeTag::Int)
        );
        assert_eq!(
            HeaderLabel::parse("Data:json", &types),
            HeaderLabel::plain("Data:json")
        );
        assert_eq!(TypeSet::new().recognize("string"), None);
    }

    #[test]
    fn test_header_map_last_write_wins() {
        let mut headers = HeaderMap::new();
        assert!(headers.insert("A", HeaderLabel::plain("first")).is_none());
        let previous = headers.insert("A", HeaderLabel::new("second", TypeTag::Int));

        assert_eq!(previous, Some(HeaderLabel::plain("first")));
        assert_eq!(headers.len(), 1);
        assert_eq!(
            headers.get("A"),
            Some(&HeaderLabel::new("second", TypeTag::Int))
        );
        assert_eq!(headers.get("B"), None);
    }

    #[test]
    fn test_header_map_serialize() {
        let headers: HeaderMap = [
            ("A".to_string(), HeaderLabel::plain("Name")),
            ("B".to_string(), HeaderLabel::new("Age", TypeTag::Integer)),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            serde_json::to_value(&headers).unwrap(),
            serde_json::json!({
                "A": {"name": "Name", "type": "string"},
                "B": {"name": "Age", "type": "integer"},
            })
        );
    }
}
