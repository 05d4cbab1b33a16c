//! Record store trait definition.
//!
//! The host platform's per-collection persisted-data access layer, consumed
//! read-only by the sync core.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::RecordStoreError;

/// Abstracts the host platform's record store.
///
/// Records are raw JSON objects; the `filter` parameter is an opaque
/// record-query filter passed through unchanged. An empty `fields` slice
/// requests all fields.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Read one page of records from a collection.
    ///
    /// # Returns
    ///
    /// * `Ok(records)` - The page's records; an empty page signals the end of
    ///   the collection
    /// * `Err(RecordStoreError)` - The read failed
    async fn read_page(
        &self,
        collection: &str,
        fields: &[String],
        filter: &Value,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Value>, RecordStoreError>;

    /// Read specific records by primary key, under the same field selection
    /// and filter as [`read_page`](RecordStore::read_page).
    ///
    /// The result may be shorter than `keys` when the filter excludes some of
    /// the requested records.
    async fn read_by_keys(
        &self,
        collection: &str,
        primary_key: &str,
        keys: &[Value],
        fields: &[String],
        filter: &Value,
    ) -> Result<Vec<Value>, RecordStoreError>;
}
