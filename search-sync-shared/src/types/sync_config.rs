//! Top-level sync configuration.
//!
//! Typed view over the single persisted settings record. The plugin treats
//! sync as disabled unless the record carries a search host, an API key, and
//! at least one collection configuration.

use serde::Deserialize;

use crate::types::CollectionConfig;

/// Policy for handling the task handle returned by incremental index writes.
///
/// Full reindex always waits on index creation; incremental create, update,
/// and delete writes consult this policy instead.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WritePolicy {
    /// Submit the write and log the task uid without waiting on its outcome.
    #[default]
    FireAndForget,
    /// Wait on task completion and log a warning when the write failed.
    WaitAndReport,
}

/// Parsed sync configuration covering every synchronized collection.
///
/// # Fields
///
/// - `host`: base URL of the search-index service
/// - `api_key`: credential for the search-index service
/// - `collections`: per-collection settings (wire name `collections_configuration`)
/// - `write_policy`: how incremental write tasks are settled
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SyncConfig {
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(rename = "collections_configuration", default)]
    pub collections: Vec<CollectionConfig>,
    #[serde(default)]
    pub write_policy: WritePolicy,
}

impl SyncConfig {
    /// Whether the configuration is complete enough to sync.
    ///
    /// Sync is disabled unless host and API key are non-empty and at least
    /// one collection is configured.
    pub fn is_configured(&self) -> bool {
        !self.host.is_empty() && !self.api_key.is_empty() && !self.collections.is_empty()
    }
}
