//! Reconstructed feed output

use chrono::{DateTime, Utc};
use ghostsheet_core::{FieldValue, HeaderMap, Record};
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use std::collections::{btree_map, BTreeMap};

/// A reconstructed feed
///
/// Serializes as `{"id", "updated", "title", "headers", "items"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedResult {
    pub id: String,
    /// Last update time; `None` when the feed's timestamp is not RFC 3339
    pub updated: Option<DateTime<Utc>>,
    pub title: String,
    /// Column letters to field declaration
    pub headers: HeaderMap,
    /// Records by row
    pub items: Items,
}

impl FeedResult {
    /// Get the record at a zero-based index
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.items.get(index)
    }

    /// Iterate over present records with their indices
    pub fn rows(&self) -> btree_map::Iter<'_, usize, Record> {
        self.items.iter()
    }
}

/// Sparse sequence of records
///
/// A record exists only for rows that had at least one cell placed in
/// them. Missing rows are holes, not empty records; they serialize as
/// `null` so that array positions still line up with sheet rows.
///
/// Storage is sparse but [`Items::len`], [`Items::to_vec`] and the
/// serialized form are dense up to the last index. A lone cell on a very
/// high row (such as `A4294967295`) makes those allocate or write one slot
/// per row; callers reading untrusted feeds should check
/// [`Items::len`] before materializing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Items(BTreeMap<usize, Record>);

impl Items {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, creating the record on first use
    pub fn set(&mut self, index: usize, name: &str, value: FieldValue) {
        self.0
            .entry(index)
            .or_default()
            .insert(name.to_string(), value);
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.0.get(&index)
    }

    /// Length of the sequence, holes included (last index + 1)
    pub fn len(&self) -> usize {
        self.0.keys().next_back().map_or(0, |last| last + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of records actually present
    pub fn present(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, usize, Record> {
        self.0.iter()
    }

    /// Dense copy with `None` in the holes
    pub fn to_vec(&self) -> Vec<Option<Record>> {
        (0..self.len()).map(|index| self.0.get(&index).cloned()).collect()
    }
}

impl Serialize for Items {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.len();
        let mut seq = serializer.serialize_seq(Some(len))?;
        for index in 0..len {
            seq.serialize_element(&self.0.get(&index))?;
        }
        seq.end()
    }
}

impl FromIterator<(usize, Record)> for Items {
    fn from_iter<I: IntoIterator<Item = (usize, Record)>>(iter: I) -> Self {
        Items(iter.into_iter().collect())
    }
}
