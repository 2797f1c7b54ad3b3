//! Field value types

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// One reconstructed row: field name to coerced value
pub type Record = BTreeMap<String, FieldValue>;

/// A cell's content after coercion to its column's declared type
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Empty content with nullfill enabled
    Null,

    /// Text, unchanged from the feed
    String(String),

    /// Whole number from an `int`/`integer` column
    Integer(i64),

    /// Number from a `number` column (or an `int` too large for `i64`)
    Number(f64),

    /// Numeric column whose content is not a number
    ///
    /// Kept distinct from `0` so a bad cell cannot pass for a real zero.
    /// Serializes as `null`.
    NotANumber,

    /// Comma-separated list from an `array` column
    Array(Vec<String>),

    /// Boolean from a `bool`/`boolean` column
    Boolean(bool),

    /// Parsed value from a `json` column
    Json(serde_json::Value),
}

impl FieldValue {
    /// Create a new string value
    pub fn string<S: Into<String>>(s: S) -> Self {
        FieldValue::String(s.into())
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Check if the value is the not-a-number sentinel
    pub fn is_nan(&self) -> bool {
        matches!(self, FieldValue::NotANumber)
    }

    /// Try to get the value as a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as an integer
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a float (integers widen)
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(n) => Some(*n as f64),
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the value as a list of strings
    pub fn as_array(&self) -> Option<&[String]> {
        match self {
            FieldValue::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            FieldValue::Null | FieldValue::NotANumber => serializer.serialize_unit(),
            FieldValue::String(s) => serializer.serialize_str(s),
            FieldValue::Integer(n) => serializer.serialize_i64(*n),
            // serde_json writes non-finite floats as null
            FieldValue::Number(n) => serializer.serialize_f64(*n),
            FieldValue::Array(items) => items.serialize(serializer),
            FieldValue::Boolean(b) => serializer.serialize_bool(*b),
            FieldValue::Json(v) => v.serialize(serializer),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::NotANumber => write!(f, "NaN"),
            FieldValue::Array(items) => write!(f, "{}", items.join(",")),
            FieldValue::Boolean(b) => write!(f, "{}", b),
            FieldValue::Json(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Integer(n)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Boolean(b)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::Array(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_accessors() {
        assert_eq!(FieldValue::from("x").as_str(), Some("x"));
        assert_eq!(FieldValue::from(7i64).as_i64(), Some(7));
        assert_eq!(FieldValue::from(7i64).as_f64(), Some(7.0));
        assert_eq!(FieldValue::from(2.5).as_f64(), Some(2.5));
        assert_eq!(FieldValue::from(true).as_bool(), Some(true));
        assert_eq!(FieldValue::from("1").as_bool(), None);
        assert!(FieldValue::Null.is_null());
        assert!(FieldValue::NotANumber.is_nan());
        assert_eq!(FieldValue::NotANumber.as_f64(), None);
    }

    #[test]
    fn test_serialize() {
        let record: Record = [
            ("a".to_string(), FieldValue::Null),
            ("b".to_string(), FieldValue::NotANumber),
            ("c".to_string(), FieldValue::Integer(30)),
            ("d".to_string(), FieldValue::Number(1.5)),
            ("e".to_string(), FieldValue::Number(f64::INFINITY)),
            (
                "f".to_string(),
                FieldValue::Array(vec!["x".into(), " y".into()]),
            ),
            ("g".to_string(), FieldValue::Boolean(false)),
            ("h".to_string(), FieldValue::Json(json!({"k": [1, 2]}))),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "a": null,
                "b": null,
                "c": 30,
                "d": 1.5,
                "e": null,
                "f": ["x", " y"],
                "g": false,
                "h": {"k": [1, 2]},
            })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldValue::Null.to_string(), "");
        assert_eq!(FieldValue::NotANumber.to_string(), "NaN");
        assert_eq!(
            FieldValue::Array(vec!["a".into(), "b".into()]).to_string(),
            "a,b"
        );
        assert_eq!(FieldValue::Boolean(true).to_string(), "true");
    }
}
