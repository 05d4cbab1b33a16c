//! Dependency initialization and wiring for the sync plugin.

use std::env;
use std::sync::Arc;

use tracing::info;

use crate::config::settings::{load_sync_config, DEFAULT_SETTINGS_COLLECTION};
use crate::PluginError;
use search_sync_repository::{
    MeilisearchProvider, PlatformRecordStore, RecordStore, SearchIndexProvider,
};
use search_sync_shared::SyncConfig;

/// Default host platform URL.
const DEFAULT_PLATFORM_URL: &str = "http://localhost:8055";

/// Container for all initialized dependencies.
///
/// Built once per process start from the environment and the persisted
/// settings record; a configuration change requires a restart.
pub struct Dependencies {
    /// Read-only access to the host platform's records.
    pub records: Arc<dyn RecordStore>,
    /// The search-index service client.
    pub index: Arc<dyn SearchIndexProvider>,
    /// The parsed sync configuration.
    pub config: SyncConfig,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables and the
    /// persisted settings record.
    ///
    /// # Environment Variables
    ///
    /// - `PLATFORM_URL`: host platform base URL (default: http://localhost:8055)
    /// - `PLATFORM_TOKEN`: bearer token for record reads (default: none)
    /// - `SETTINGS_COLLECTION`: collection holding the settings record
    ///   (default: search_sync_settings)
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Dependencies))` - Sync is configured and ready
    /// * `Ok(None)` - Settings are absent or incomplete; sync is disabled
    /// * `Err(PluginError)` - A client could not be built or the settings
    ///   read failed
    pub async fn from_env() -> Result<Option<Self>, PluginError> {
        let platform_url =
            env::var("PLATFORM_URL").unwrap_or_else(|_| DEFAULT_PLATFORM_URL.to_string());
        let platform_token = env::var("PLATFORM_TOKEN").ok();
        let settings_collection = env::var("SETTINGS_COLLECTION")
            .unwrap_or_else(|_| DEFAULT_SETTINGS_COLLECTION.to_string());

        info!(
            platform_url = %platform_url,
            settings_collection = %settings_collection,
            "Initializing dependencies"
        );

        let records = PlatformRecordStore::new(&platform_url, platform_token.as_deref())
            .map_err(|e| PluginError::config(format!("Failed to create record store: {}", e)))?;
        let records: Arc<dyn RecordStore> = Arc::new(records);

        let config = load_sync_config(records.as_ref(), &settings_collection)
            .await
            .map_err(|e| PluginError::config(format!("Failed to load settings: {}", e)))?;

        let Some(config) = config else {
            return Ok(None);
        };

        let index = MeilisearchProvider::new(&config.host, &config.api_key).map_err(|e| {
            PluginError::config(format!("Failed to create search index provider: {}", e))
        })?;

        info!(
            host = %config.host,
            collections = config.collections.len(),
            "Search sync configured"
        );

        Ok(Some(Self {
            records,
            index: Arc::new(index),
            config,
        }))
    }
}
