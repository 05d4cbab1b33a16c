//! Incremental sync hooks.
//!
//! Per-collection handlers that keep the search index consistent with
//! single-record changes, plus the registration seam onto the host
//! platform's event dispatcher.

mod dispatcher;
mod handler;

pub use dispatcher::{ActionEvent, ActionHandler, HookDispatcher, ItemAction};
pub use handler::CollectionSyncHandler;

use std::sync::Arc;

use tracing::info;

use search_sync_repository::{RecordStore, SearchIndexProvider};
use search_sync_shared::SyncConfig;

/// Register incremental sync handlers for every configured collection.
///
/// Each collection gets its own handler holding an immutable copy of that
/// collection's configuration, registered for the create, update, and delete
/// item actions. Called once at plugin startup, after configuration
/// validation.
pub fn register_hooks(
    dispatcher: &mut dyn HookDispatcher,
    records: Arc<dyn RecordStore>,
    index: Arc<dyn SearchIndexProvider>,
    config: &SyncConfig,
) {
    for collection in &config.collections {
        let handler: Arc<dyn ActionHandler> = Arc::new(CollectionSyncHandler::new(
            collection.clone(),
            records.clone(),
            index.clone(),
            config.write_policy,
        ));

        for action in [ItemAction::Create, ItemAction::Update, ItemAction::Delete] {
            dispatcher.on_action(&collection.collection, action, handler.clone());
        }

        info!(collection = %collection.collection, "Registered sync hooks");
    }
}
