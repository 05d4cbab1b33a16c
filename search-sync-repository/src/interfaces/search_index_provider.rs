//! Search index provider trait definition.
//!
//! This module defines the abstract interface for search-index operations,
//! allowing for different backend implementations (Meilisearch-protocol
//! services, in-memory test doubles, etc.).

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::SearchIndexError;
use crate::types::{AttributeSettings, IndexHandle, TaskHandle, TaskInfo};
use search_sync_shared::IndexDocument;

/// Abstracts the search-index service consumed by the sync core.
///
/// Implementations are injected into the orchestrator and the incremental
/// sync handlers to enable dependency injection and easy testing with mock
/// implementations. Every mutating operation is asynchronous on the service
/// side and returns a [`TaskHandle`]; callers decide whether to wait on the
/// task via [`get_task`](SearchIndexProvider::get_task) polling.
///
/// All methods return `Result<T, SearchIndexError>` for consistent error
/// handling across backend implementations.
#[async_trait]
pub trait SearchIndexProvider: Send + Sync {
    /// Fetch an index by name.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(IndexHandle))` - The index exists
    /// * `Ok(None)` - No index with that name
    /// * `Err(SearchIndexError)` - The lookup itself failed
    async fn get_index(&self, name: &str) -> Result<Option<IndexHandle>, SearchIndexError>;

    /// Create an index with the given primary-key field.
    ///
    /// # Returns
    ///
    /// * `Ok(TaskHandle)` - The creation task was accepted
    /// * `Err(SearchIndexError)` - The request failed
    async fn create_index(
        &self,
        name: &str,
        primary_key: &str,
    ) -> Result<TaskHandle, SearchIndexError>;

    /// Read the current status of an asynchronous task.
    async fn get_task(&self, task_uid: u64) -> Result<TaskInfo, SearchIndexError>;

    /// Push filterable/sortable attribute lists to an index's settings.
    async fn update_attribute_settings(
        &self,
        name: &str,
        settings: &AttributeSettings,
    ) -> Result<TaskHandle, SearchIndexError>;

    /// Delete every document in an index, leaving the index itself in place.
    async fn delete_all_documents(&self, name: &str) -> Result<TaskHandle, SearchIndexError>;

    /// Add or replace a batch of documents, keyed by the given primary-key
    /// field.
    async fn upsert_documents(
        &self,
        name: &str,
        documents: &[IndexDocument],
        primary_key: &str,
    ) -> Result<TaskHandle, SearchIndexError>;

    /// Delete a single document by its record key.
    ///
    /// Deleting a document that does not exist is not an error; the service
    /// reports that through the task's terminal state instead.
    async fn delete_document(&self, name: &str, key: &Value)
        -> Result<TaskHandle, SearchIndexError>;
}
