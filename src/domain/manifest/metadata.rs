//! Key/value metadata as the platform stores it: a list of
//! `{"key": ..., "value": ...}` objects instead of a mapping.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataEntry {
    pub key: String,
    pub value: Value,
}

impl MetadataEntry {
    pub fn new<K: Into<String>>(key: K, value: Value) -> Self {
        Self { key: key.into(), value }
    }
}

/// Convert a mapping into metadata entries, keeping the mapping's order.
pub fn entries_from_map(map: &Map<String, Value>) -> Vec<MetadataEntry> {
    map.iter().map(|(key, value)| MetadataEntry::new(key.clone(), value.clone())).collect()
}

/// Per-column metadata, serialized as `{column: [{key, value}, ...]}` in
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnMetadata {
    columns: Vec<(String, Vec<MetadataEntry>)>,
}

impl ColumnMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append entries for `column`. A repeated column extends its list.
    pub fn insert<C: Into<String>>(&mut self, column: C, entries: Vec<MetadataEntry>) {
        let column = column.into();
        match self.columns.iter_mut().find(|(name, _)| *name == column) {
            Some((_, existing)) => existing.extend(entries),
            None => self.columns.push((column, entries)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, column: &str) -> Option<&[MetadataEntry]> {
        self.columns.iter().find(|(name, _)| name == column).map(|(_, entries)| entries.as_slice())
    }
}

impl Serialize for ColumnMetadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, entries) in &self.columns {
            map.serialize_entry(column, entries)?;
        }
        map.end()
    }
}
