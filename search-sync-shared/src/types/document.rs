//! Flattened document shape uploaded to the search index.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A flat, index-ready document derived from one source record.
///
/// Keys are dot-joined field paths (e.g. `author.name`), values are scalar
/// JSON values. The source record's primary key field survives flattening
/// unmodified and is the document's only identity.
///
/// # Example
///
/// ```
/// use search_sync_shared::IndexDocument;
/// use serde_json::json;
///
/// let mut document = IndexDocument::new();
/// document.insert("id".to_string(), json!(1));
/// document.insert("author.name".to_string(), json!("Ada"));
///
/// assert_eq!(document.get("author.name"), Some(&json!("Ada")));
/// assert_eq!(document.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndexDocument(Map<String, Value>);

impl IndexDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Insert a flattened key/value pair.
    pub fn insert(&mut self, key: String, value: Value) {
        self.0.insert(key, value);
    }

    /// Look up a value by its flattened key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The value of the given primary key field, if present.
    pub fn primary_key_value(&self, primary_key: &str) -> Option<&Value> {
        self.0.get(primary_key)
    }

    /// Number of keys in the document.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the document has no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the flattened key/value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for IndexDocument {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
