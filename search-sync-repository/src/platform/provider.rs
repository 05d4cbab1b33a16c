//! Host-platform record store implementation.
//!
//! Concrete `RecordStore` over the host platform's items REST API. Reads are
//! always scoped by the caller's field selection and record-query filter;
//! the filter itself is opaque to this module and forwarded as-is.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, error, info};
use url::Url;

use crate::errors::RecordStoreError;
use crate::interfaces::RecordStore;

/// Record store backed by the host platform's items REST API.
///
/// Collections are addressed as `{base}/items/{collection}`; responses wrap
/// the record list in a `data` envelope.
pub struct PlatformRecordStore {
    base: String,
    token: Option<String>,
    client: Client,
}

/// Response envelope for item reads.
#[derive(Debug, Deserialize)]
struct ItemsResponse {
    #[serde(default)]
    data: Vec<Value>,
}

impl PlatformRecordStore {
    /// Create a new record store client.
    ///
    /// # Arguments
    ///
    /// * `base` - The platform base URL (e.g., "http://localhost:8055")
    /// * `token` - Optional bearer token for authenticated reads
    ///
    /// # Returns
    ///
    /// * `Ok(PlatformRecordStore)` - A new client instance
    /// * `Err(RecordStoreError)` - If the base is not a valid URL
    pub fn new(base: &str, token: Option<&str>) -> Result<Self, RecordStoreError> {
        Url::parse(base).map_err(|e| RecordStoreError::connection(e.to_string()))?;

        let base = base.trim_end_matches('/').to_string();

        info!(base = %base, "Created record store client");

        Ok(Self {
            base,
            token: token.map(String::from),
            client: Client::new(),
        })
    }

    fn items_route(&self, collection: &str) -> String {
        format!("{}/items/{}", self.base, collection)
    }

    async fn fetch(
        &self,
        collection: &str,
        params: Vec<(String, String)>,
    ) -> Result<Vec<Value>, RecordStoreError> {
        let mut request = self.client.get(self.items_route(collection)).query(&params);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| RecordStoreError::connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, collection, "Record read failed");
            return Err(RecordStoreError::read(format!(
                "status {}: {}",
                status, body
            )));
        }

        let envelope = response
            .json::<ItemsResponse>()
            .await
            .map_err(|e| RecordStoreError::parse(e.to_string()))?;

        Ok(envelope.data)
    }
}

#[async_trait]
impl RecordStore for PlatformRecordStore {
    async fn read_page(
        &self,
        collection: &str,
        fields: &[String],
        filter: &Value,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Value>, RecordStoreError> {
        let mut params = vec![
            ("limit".to_string(), limit.to_string()),
            ("offset".to_string(), offset.to_string()),
        ];
        if let Some(fields) = fields_param(fields) {
            params.push(("fields".to_string(), fields));
        }
        if let Some(filter) = filter_param(filter) {
            params.push(("filter".to_string(), filter));
        }

        let records = self.fetch(collection, params).await?;
        debug!(collection, offset, count = records.len(), "Read record page");
        Ok(records)
    }

    async fn read_by_keys(
        &self,
        collection: &str,
        primary_key: &str,
        keys: &[Value],
        fields: &[String],
        filter: &Value,
    ) -> Result<Vec<Value>, RecordStoreError> {
        let mut params = Vec::new();
        if let Some(fields) = fields_param(fields) {
            params.push(("fields".to_string(), fields));
        }
        let merged = merged_key_filter(primary_key, keys, filter);
        params.push(("filter".to_string(), merged.to_string()));
        params.push(("limit".to_string(), keys.len().to_string()));

        let records = self.fetch(collection, params).await?;
        debug!(
            collection,
            requested = keys.len(),
            returned = records.len(),
            "Read records by key"
        );
        Ok(records)
    }
}

/// Comma-joined field selection, or `None` when all fields are requested.
fn fields_param(fields: &[String]) -> Option<String> {
    if fields.is_empty() {
        None
    } else {
        Some(fields.join(","))
    }
}

/// Render a non-empty filter for the query string.
fn filter_param(filter: &Value) -> Option<String> {
    if is_empty_filter(filter) {
        None
    } else {
        Some(filter.to_string())
    }
}

fn is_empty_filter(filter: &Value) -> bool {
    match filter {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Combine the configured filter with a primary-key membership clause.
///
/// Used by keyed reads so that excluded-by-filter records stay invisible to
/// the sync core, exactly as they are during paged reads.
fn merged_key_filter(primary_key: &str, keys: &[Value], filter: &Value) -> Value {
    let key_clause = json!({ primary_key: { "_in": keys } });
    if is_empty_filter(filter) {
        key_clause
    } else {
        json!({ "_and": [filter.clone(), key_clause] })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fields_param() {
        assert_eq!(fields_param(&[]), None);
        assert_eq!(
            fields_param(&["title".to_string(), "body".to_string()]),
            Some("title,body".to_string())
        );
    }

    #[test]
    fn test_filter_param_skips_empty() {
        assert_eq!(filter_param(&Value::Null), None);
        assert_eq!(filter_param(&json!({})), None);
        assert_eq!(
            filter_param(&json!({"status": {"_eq": "published"}})),
            Some(r#"{"status":{"_eq":"published"}}"#.to_string())
        );
    }

    #[test]
    fn test_merged_key_filter_without_configured_filter() {
        let merged = merged_key_filter("id", &[json!(1), json!(2)], &Value::Null);
        assert_eq!(merged, json!({"id": {"_in": [1, 2]}}));
    }

    #[test]
    fn test_merged_key_filter_combines_with_and() {
        let filter = json!({"status": {"_eq": "published"}});
        let merged = merged_key_filter("id", &[json!(1)], &filter);
        assert_eq!(
            merged,
            json!({"_and": [
                {"status": {"_eq": "published"}},
                {"id": {"_in": [1]}}
            ]})
        );
    }

    #[test]
    fn test_new_rejects_invalid_base() {
        let result = PlatformRecordStore::new("::", None);
        assert!(matches!(result, Err(RecordStoreError::ConnectionError(_))));
    }

    #[test]
    fn test_items_route() {
        let store = PlatformRecordStore::new("http://localhost:8055/", None).unwrap();
        assert_eq!(
            store.items_route("articles"),
            "http://localhost:8055/items/articles"
        );
    }

    #[test]
    fn test_items_response_envelope() {
        let envelope: ItemsResponse =
            serde_json::from_value(json!({"data": [{"id": 1}]})).unwrap();
        assert_eq!(envelope.data, vec![json!({"id": 1})]);

        let empty: ItemsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(empty.data.is_empty());
    }
}
