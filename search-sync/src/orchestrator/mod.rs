//! Reindex orchestrator for the sync core.
//!
//! Rebuilds each configured collection's search index from the record store:
//! ensures the index exists, pushes attribute settings, clears stale
//! documents, then streams records in pages through the transform into bulk
//! upserts.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tracing::{info, instrument, warn};

use crate::errors::SyncError;
use crate::processor::transform;
use crate::waiter::TaskWaiter;
use search_sync_repository::{AttributeSettings, RecordStore, SearchIndexProvider};
use search_sync_shared::{CollectionConfig, IndexDocument, SyncConfig};

/// Number of records fetched from the record store per page.
pub const PAGE_SIZE: usize = 100;

/// Orchestrates the full destructive rebuild of every configured collection.
///
/// Collections are independent (each owns its own index and page cursor) and
/// are rebuilt concurrently; the steps within one collection are strictly
/// sequential because each depends on the previous one.
pub struct ReindexOrchestrator {
    records: Arc<dyn RecordStore>,
    index: Arc<dyn SearchIndexProvider>,
    waiter: TaskWaiter,
}

impl ReindexOrchestrator {
    /// Create an orchestrator with the default task-poll interval.
    pub fn new(records: Arc<dyn RecordStore>, index: Arc<dyn SearchIndexProvider>) -> Self {
        let waiter = TaskWaiter::new(index.clone());
        Self {
            records,
            index,
            waiter,
        }
    }

    /// Create an orchestrator with a custom task-poll interval.
    pub fn with_poll_interval(
        records: Arc<dyn RecordStore>,
        index: Arc<dyn SearchIndexProvider>,
        poll_interval: Duration,
    ) -> Self {
        let waiter = TaskWaiter::with_poll_interval(index.clone(), poll_interval);
        Self {
            records,
            index,
            waiter,
        }
    }

    /// Rebuild every configured collection's index.
    ///
    /// Best-effort: a failing collection is logged and skipped while the
    /// others proceed, and the overall operation completes regardless.
    #[instrument(skip(self, config), fields(collections = config.collections.len()))]
    pub async fn reindex(&self, config: &SyncConfig) {
        info!(collections = config.collections.len(), "Starting reindex");

        let results = join_all(
            config
                .collections
                .iter()
                .map(|collection| self.reindex_collection(collection)),
        )
        .await;

        for (collection, result) in config.collections.iter().zip(results) {
            if let Err(e) = result {
                warn!(
                    collection = %collection.collection,
                    error = %e,
                    "Collection reindex failed"
                );
            }
        }

        info!("Reindex complete");
    }

    /// Rebuild a single collection's index.
    async fn reindex_collection(&self, config: &CollectionConfig) -> Result<(), SyncError> {
        self.ensure_index(config).await?;

        if config.has_attribute_settings() {
            let settings = AttributeSettings {
                filterable_attributes: config.filterable.clone(),
                sortable_attributes: config.sortable.clone(),
            };
            // Settings apply independently of document sync; no wait needed.
            self.index
                .update_attribute_settings(&config.collection, &settings)
                .await?;
        }

        // Reindex is a destructive rebuild, not an incremental merge.
        self.index.delete_all_documents(&config.collection).await?;

        let fields = config.effective_fields();
        let mut offset = 0;
        let mut total = 0;

        loop {
            let page = self
                .records
                .read_page(
                    &config.collection,
                    &fields,
                    &config.filter,
                    PAGE_SIZE,
                    offset,
                )
                .await?;

            if page.is_empty() {
                break;
            }

            let documents: Vec<IndexDocument> = page.iter().map(transform).collect();
            let batch = documents.len();
            self.index
                .upsert_documents(&config.collection, &documents, &config.primary_key)
                .await?;

            total += batch;
            info!(
                collection = %config.collection,
                offset,
                batch,
                "Indexed record page"
            );

            offset += PAGE_SIZE;
        }

        info!(
            collection = %config.collection,
            total,
            "Collection reindex complete"
        );
        Ok(())
    }

    /// Fetch the collection's index, creating it when absent.
    async fn ensure_index(&self, config: &CollectionConfig) -> Result<(), SyncError> {
        if self.index.get_index(&config.collection).await?.is_some() {
            return Ok(());
        }

        let task = self
            .index
            .create_index(&config.collection, &config.primary_key)
            .await
            .map_err(|e| SyncError::index_unavailable(e.to_string()))?;

        let outcome = self.waiter.wait(&task).await;
        if !outcome.succeeded {
            return Err(SyncError::index_unavailable(outcome.message));
        }

        Ok(())
    }
}
