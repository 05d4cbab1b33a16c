//! Meilisearch provider implementation.
//!
//! This module provides the concrete implementation of `SearchIndexProvider`
//! speaking the Meilisearch REST protocol over reqwest.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde_json::{json, Value};
use tracing::{debug, error, info};
use url::Url;

use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;
use crate::types::{AttributeSettings, IndexHandle, TaskHandle, TaskInfo};
use crate::utils::record_key_string;
use search_sync_shared::IndexDocument;

/// Meilisearch provider implementation.
///
/// Talks to a Meilisearch-protocol service over its REST API. Every mutating
/// call is acknowledged by the service with a task uid; completion is
/// observed separately through [`get_task`](SearchIndexProvider::get_task).
///
/// # Example
///
/// ```ignore
/// use search_sync_repository::MeilisearchProvider;
///
/// let provider = MeilisearchProvider::new("http://localhost:7700", "masterKey")?;
/// let task = provider.create_index("articles", "id").await?;
/// ```
pub struct MeilisearchProvider {
    base: String,
    api_key: String,
    client: Client,
}

impl MeilisearchProvider {
    /// Create a new provider for the service at the given base URL.
    ///
    /// # Arguments
    ///
    /// * `host` - The service base URL (e.g., "http://localhost:7700")
    /// * `api_key` - Bearer credential sent with every request
    ///
    /// # Returns
    ///
    /// * `Ok(MeilisearchProvider)` - A new provider instance
    /// * `Err(SearchIndexError)` - If the host is not a valid URL
    pub fn new(host: &str, api_key: &str) -> Result<Self, SearchIndexError> {
        Url::parse(host).map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let base = host.trim_end_matches('/').to_string();

        info!(host = %base, "Created search index provider");

        Ok(Self {
            base,
            api_key: api_key.to_string(),
            client: Client::new(),
        })
    }

    fn index_route(&self, name: &str) -> String {
        format!("{}/indexes/{}", self.base, name)
    }

    fn documents_route(&self, name: &str) -> String {
        format!("{}/indexes/{}/documents", self.base, name)
    }

    fn document_route(&self, name: &str, key: &Value) -> String {
        format!(
            "{}/indexes/{}/documents/{}",
            self.base,
            name,
            record_key_string(key)
        )
    }

    fn settings_route(&self, name: &str) -> String {
        format!("{}/indexes/{}/settings", self.base, name)
    }

    fn task_route(&self, task_uid: u64) -> String {
        format!("{}/tasks/{}", self.base, task_uid)
    }

    /// Decode a task acknowledgment, mapping non-success statuses through the
    /// operation-specific error constructor.
    async fn accept_task<F>(
        response: Response,
        on_error: F,
    ) -> Result<TaskHandle, SearchIndexError>
    where
        F: FnOnce(String) -> SearchIndexError,
    {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Search index request failed");
            return Err(on_error(format!("status {}: {}", status, body)));
        }

        response
            .json::<TaskHandle>()
            .await
            .map_err(|e| SearchIndexError::parse(e.to_string()))
    }
}

#[async_trait]
impl SearchIndexProvider for MeilisearchProvider {
    async fn get_index(&self, name: &str) -> Result<Option<IndexHandle>, SearchIndexError> {
        let response = self
            .client
            .get(self.index_route(name))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Index lookup failed");
            return Err(SearchIndexError::connection(format!(
                "status {}: {}",
                status, body
            )));
        }

        let handle = response
            .json::<IndexHandle>()
            .await
            .map_err(|e| SearchIndexError::parse(e.to_string()))?;

        Ok(Some(handle))
    }

    async fn create_index(
        &self,
        name: &str,
        primary_key: &str,
    ) -> Result<TaskHandle, SearchIndexError> {
        let response = self
            .client
            .post(format!("{}/indexes", self.base))
            .bearer_auth(&self.api_key)
            .json(&json!({ "uid": name, "primaryKey": primary_key }))
            .send()
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let handle = Self::accept_task(response, SearchIndexError::index_creation).await?;

        debug!(index = %name, task_uid = handle.task_uid, "Index creation submitted");
        Ok(handle)
    }

    async fn get_task(&self, task_uid: u64) -> Result<TaskInfo, SearchIndexError> {
        let response = self
            .client
            .get(self.task_route(task_uid))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, task_uid, "Task status read failed");
            return Err(SearchIndexError::task_status(format!(
                "status {}: {}",
                status, body
            )));
        }

        response
            .json::<TaskInfo>()
            .await
            .map_err(|e| SearchIndexError::parse(e.to_string()))
    }

    async fn update_attribute_settings(
        &self,
        name: &str,
        settings: &AttributeSettings,
    ) -> Result<TaskHandle, SearchIndexError> {
        let response = self
            .client
            .patch(self.settings_route(name))
            .bearer_auth(&self.api_key)
            .json(settings)
            .send()
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let handle = Self::accept_task(response, SearchIndexError::settings).await?;

        debug!(index = %name, task_uid = handle.task_uid, "Attribute settings submitted");
        Ok(handle)
    }

    async fn delete_all_documents(&self, name: &str) -> Result<TaskHandle, SearchIndexError> {
        let response = self
            .client
            .delete(self.documents_route(name))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let handle = Self::accept_task(response, SearchIndexError::delete).await?;

        debug!(index = %name, task_uid = handle.task_uid, "Document clear submitted");
        Ok(handle)
    }

    async fn upsert_documents(
        &self,
        name: &str,
        documents: &[IndexDocument],
        primary_key: &str,
    ) -> Result<TaskHandle, SearchIndexError> {
        let response = self
            .client
            .post(self.documents_route(name))
            .bearer_auth(&self.api_key)
            .query(&[("primaryKey", primary_key)])
            .json(documents)
            .send()
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let handle = Self::accept_task(response, SearchIndexError::upsert).await?;

        debug!(
            index = %name,
            count = documents.len(),
            task_uid = handle.task_uid,
            "Document upsert submitted"
        );
        Ok(handle)
    }

    async fn delete_document(
        &self,
        name: &str,
        key: &Value,
    ) -> Result<TaskHandle, SearchIndexError> {
        let response = self
            .client
            .delete(self.document_route(name, key))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let handle = Self::accept_task(response, SearchIndexError::delete).await?;

        debug!(index = %name, task_uid = handle.task_uid, "Document delete submitted");
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn provider() -> MeilisearchProvider {
        MeilisearchProvider::new("http://localhost:7700/", "key").unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_host() {
        let result = MeilisearchProvider::new("not a url", "key");
        assert!(matches!(
            result,
            Err(SearchIndexError::ConnectionError(_))
        ));
    }

    #[test]
    fn test_routes_trim_trailing_slash() {
        let provider = provider();
        assert_eq!(
            provider.index_route("articles"),
            "http://localhost:7700/indexes/articles"
        );
        assert_eq!(
            provider.documents_route("articles"),
            "http://localhost:7700/indexes/articles/documents"
        );
        assert_eq!(
            provider.settings_route("articles"),
            "http://localhost:7700/indexes/articles/settings"
        );
        assert_eq!(provider.task_route(9), "http://localhost:7700/tasks/9");
    }

    #[test]
    fn test_document_route_renders_keys_without_quotes() {
        let provider = provider();
        assert_eq!(
            provider.document_route("articles", &json!(1)),
            "http://localhost:7700/indexes/articles/documents/1"
        );
        assert_eq!(
            provider.document_route("articles", &json!("a1b2")),
            "http://localhost:7700/indexes/articles/documents/a1b2"
        );
    }
}
