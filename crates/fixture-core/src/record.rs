//! Record type holding generated key/value pairs.

use crate::value::FixtureValue;
use std::collections::BTreeMap;

/// One generated fixture record, a mapping from string keys to values.
///
/// Keys are unique within a record; inserting a duplicate key overwrites the
/// earlier value, so a record built from N insertion attempts may hold fewer
/// than N entries. Fields are stored in a sorted map, which keeps the
/// serialized key order stable across runs with the same seed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    fields: BTreeMap<String, FixtureValue>,
}

impl Record {
    /// Create a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, returning the previous value if the key was present.
    pub fn insert(&mut self, key: impl Into<String>, value: FixtureValue) -> Option<FixtureValue> {
        self.fields.insert(key.into(), value)
    }

    /// Get a field value by key.
    pub fn get(&self, key: &str) -> Option<&FixtureValue> {
        self.fields.get(key)
    }

    /// Number of fields in the record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over the fields in serialized order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FixtureValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Convert the record into a JSON object value.
    pub fn to_json(&self) -> serde_json::Value {
        let obj: serde_json::Map<String, serde_json::Value> = self
            .fields
            .iter()
            .map(|(key, value)| (key.clone(), value.into()))
            .collect();
        serde_json::Value::Object(obj)
    }
}
