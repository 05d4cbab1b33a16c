//! Per-collection incremental sync handler.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::SyncError;
use crate::hooks::dispatcher::{ActionEvent, ActionHandler, ItemAction};
use crate::processor::transform;
use crate::waiter::TaskWaiter;
use search_sync_repository::{record_key_string, RecordStore, SearchIndexProvider, TaskHandle};
use search_sync_shared::{CollectionConfig, IndexDocument, WritePolicy};

/// Keeps one collection's index consistent with single-record changes.
///
/// Each handler owns an immutable copy of its collection configuration, so
/// concurrently registered collections cannot alias each other's state. The
/// record store is consulted at invocation time under the configured field
/// selection and filter; a record the filter excludes is treated as absent
/// and removed from the index on update.
pub struct CollectionSyncHandler {
    config: CollectionConfig,
    records: Arc<dyn RecordStore>,
    index: Arc<dyn SearchIndexProvider>,
    policy: WritePolicy,
    waiter: TaskWaiter,
}

impl CollectionSyncHandler {
    /// Create a handler for one configured collection.
    pub fn new(
        config: CollectionConfig,
        records: Arc<dyn RecordStore>,
        index: Arc<dyn SearchIndexProvider>,
        policy: WritePolicy,
    ) -> Self {
        let waiter = TaskWaiter::new(index.clone());
        Self {
            config,
            records,
            index,
            policy,
            waiter,
        }
    }

    /// React to newly created records.
    ///
    /// Records the filtered read does not return do not satisfy the sync
    /// filter and are left out of the index.
    async fn on_created(&self, keys: &[Value]) -> Result<(), SyncError> {
        let records = self.read_matching(keys).await?;
        if records.is_empty() {
            debug!(
                collection = %self.config.collection,
                "Created records excluded by filter"
            );
            return Ok(());
        }

        self.upsert(&records).await
    }

    /// React to updated records.
    ///
    /// A key missing from the filtered read no longer matches the sync
    /// filter; its document is removed from the index. The remaining
    /// records are re-upserted.
    async fn on_updated(&self, keys: &[Value]) -> Result<(), SyncError> {
        let records = self.read_matching(keys).await?;

        let present: HashSet<String> = records
            .iter()
            .filter_map(|record| record.get(&self.config.primary_key))
            .map(record_key_string)
            .collect();

        for key in keys {
            if !present.contains(&record_key_string(key)) {
                let task = self
                    .index
                    .delete_document(&self.config.collection, key)
                    .await?;
                self.settle(task, "delete").await;
            }
        }

        if records.is_empty() {
            return Ok(());
        }

        self.upsert(&records).await
    }

    /// React to deleted records: remove their documents unconditionally.
    async fn on_deleted(&self, keys: &[Value]) -> Result<(), SyncError> {
        for key in keys {
            let task = self
                .index
                .delete_document(&self.config.collection, key)
                .await?;
            self.settle(task, "delete").await;
        }
        Ok(())
    }

    /// Filtered read of the affected records.
    async fn read_matching(&self, keys: &[Value]) -> Result<Vec<Value>, SyncError> {
        let fields = self.config.effective_fields();
        let records = self
            .records
            .read_by_keys(
                &self.config.collection,
                &self.config.primary_key,
                keys,
                &fields,
                &self.config.filter,
            )
            .await?;
        Ok(records)
    }

    /// Transform and upsert a batch of records.
    async fn upsert(&self, records: &[Value]) -> Result<(), SyncError> {
        let documents: Vec<IndexDocument> = records.iter().map(transform).collect();
        let task = self
            .index
            .upsert_documents(
                &self.config.collection,
                &documents,
                &self.config.primary_key,
            )
            .await?;
        self.settle(task, "upsert").await;
        Ok(())
    }

    /// Honor the configured write policy for an accepted index task.
    async fn settle(&self, task: TaskHandle, operation: &str) {
        match self.policy {
            WritePolicy::FireAndForget => {
                debug!(
                    collection = %self.config.collection,
                    task_uid = task.task_uid,
                    operation,
                    "Submitted index task"
                );
            }
            WritePolicy::WaitAndReport => {
                let outcome = self.waiter.wait(&task).await;
                if !outcome.succeeded {
                    warn!(
                        collection = %self.config.collection,
                        task_uid = task.task_uid,
                        operation,
                        error = %outcome.message,
                        "Index write failed"
                    );
                }
            }
        }
    }
}

#[async_trait]
impl ActionHandler for CollectionSyncHandler {
    async fn handle(&self, event: ActionEvent) -> Result<(), SyncError> {
        match event.action {
            ItemAction::Create => self.on_created(&event.keys).await,
            ItemAction::Update => self.on_updated(&event.keys).await,
            ItemAction::Delete => self.on_deleted(&event.keys).await,
        }
    }
}
