//! Server-computed results
//!
//! A [`ResultSet`] is the body returned by the calculation endpoint for one
//! submission. It is immutable once received and keeps the key order of the
//! response, which drives the order of the reconciled fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key under which the service echoes the resolved compressor model
pub const MODEL_KEY: &str = "Compressor Model";

/// Result payload of one calculation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet(Map<String, Value>);

impl ResultSet {
    pub fn new(values: Map<String, Value>) -> Self {
        Self(values)
    }

    /// Defined, non-null value for a key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    /// Keys in response order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Non-empty string value for a key
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for ResultSet {
    fn from(values: Map<String, Value>) -> Self {
        Self(values)
    }
}
