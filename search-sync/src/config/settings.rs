//! Settings record parsing.
//!
//! The sync configuration lives in a single persisted settings record on the
//! host platform. Parsing is a pure mapping that fails closed: anything
//! incomplete is treated as "not configured" rather than an error.

use serde_json::Value;
use tracing::debug;

use search_sync_repository::{RecordStore, RecordStoreError};
use search_sync_shared::SyncConfig;

/// Collection holding the single settings record.
pub const DEFAULT_SETTINGS_COLLECTION: &str = "search_sync_settings";

/// Parse the raw settings record into a sync configuration.
///
/// Returns `None` when the record does not deserialize or is incomplete
/// (missing host, API key, or collection configurations); sync is then
/// disabled and every entry point becomes a silent no-op.
pub fn parse_settings(raw: &Value) -> Option<SyncConfig> {
    let config: SyncConfig = match serde_json::from_value(raw.clone()) {
        Ok(config) => config,
        Err(e) => {
            debug!(error = %e, "Settings record did not parse; sync disabled");
            return None;
        }
    };

    if !config.is_configured() {
        debug!("Settings record incomplete; sync disabled");
        return None;
    }

    Some(config)
}

/// Load and parse the settings record from the record store.
///
/// Reads the first (and only) record of the settings collection. A missing
/// record parses to `None` like any other incomplete configuration.
///
/// # Errors
///
/// Returns an error only when the read itself fails; absence of settings is
/// not an error.
pub async fn load_sync_config(
    records: &dyn RecordStore,
    settings_collection: &str,
) -> Result<Option<SyncConfig>, RecordStoreError> {
    let mut page = records
        .read_page(settings_collection, &[], &Value::Null, 1, 0)
        .await?;

    if page.is_empty() {
        debug!(
            collection = settings_collection,
            "No settings record; sync disabled"
        );
        return Ok(None);
    }

    Ok(parse_settings(&page.remove(0)))
}
