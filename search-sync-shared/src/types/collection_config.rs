//! Per-collection sync configuration.
//!
//! One entry of the persisted settings record's `collections_configuration`
//! list. Loaded once per process start or per reindex invocation and held
//! immutable for the duration of a sync operation.

use serde::Deserialize;
use serde_json::Value;

/// Sync configuration for a single record-store collection.
///
/// # Fields
///
/// - `primary_key`: name of the field that identifies a record (wire name `key`)
/// - `collection`: collection name, also used as the search index name
/// - `filter`: record-query filter, opaque to the sync core and passed through
///   to the record store unchanged
/// - `fields`: field paths fetched from the record store (empty = all fields)
/// - `filterable`: field paths marked filterable in the search index
/// - `sortable`: field paths marked sortable in the search index
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CollectionConfig {
    #[serde(rename = "key")]
    pub primary_key: String,
    pub collection: String,
    #[serde(default)]
    pub filter: Value,
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub filterable: Vec<String>,
    #[serde(default)]
    pub sortable: Vec<String>,
}

impl CollectionConfig {
    /// The field list to request from the record store.
    ///
    /// The primary key field is appended when a field selection is configured
    /// but does not already include it, so that fetched records can always be
    /// keyed in the search index. An empty selection is returned unchanged
    /// (meaning "all fields" to the record store).
    pub fn effective_fields(&self) -> Vec<String> {
        if self.fields.is_empty() {
            return Vec::new();
        }
        let mut fields = self.fields.clone();
        if !fields.iter().any(|f| f == &self.primary_key) {
            fields.push(self.primary_key.clone());
        }
        fields
    }

    /// Whether any index attribute settings are configured for this collection.
    pub fn has_attribute_settings(&self) -> bool {
        !self.filterable.is_empty() || !self.sortable.is_empty()
    }
}
