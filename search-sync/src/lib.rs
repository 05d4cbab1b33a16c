//! # Search Sync
//!
//! Plugin that keeps an external search index synchronized with the host
//! platform's record store. It reacts to the host's create/update/delete
//! lifecycle events and exposes a manual `reindex` command.
//!
//! ## Architecture
//!
//! 1. **Processor**: Transforms a nested record into a flat, index-safe document
//! 2. **Waiter**: Polls the search index for asynchronous task completion
//! 3. **Orchestrator**: Rebuilds each configured collection's index from scratch
//! 4. **Hooks**: Per-collection handlers keeping the index consistent with
//!    single-record changes
//!
//! ## Modules
//!
//! - [`config`]: Settings parsing and dependency initialization
//! - [`processor`]: Record-to-document transform
//! - [`waiter`]: Bounded task-completion polling
//! - [`orchestrator`]: Full-collection reindex
//! - [`hooks`]: Incremental sync handlers and the host dispatcher seam
//! - [`errors`]: Error types for the sync core

pub mod config;
pub mod errors;
pub mod hooks;
pub mod orchestrator;
pub mod processor;
pub mod waiter;

pub use config::Dependencies;
pub use errors::SyncError;

use thiserror::Error;
use tracing::info;

use crate::hooks::HookDispatcher;

/// Plugin startup: validate configuration and register the incremental sync
/// handlers against the host's event dispatcher.
///
/// An absent or incomplete configuration disables sync: no hooks are
/// registered and `Ok(None)` is returned.
pub async fn init(
    dispatcher: &mut dyn HookDispatcher,
) -> Result<Option<Dependencies>, PluginError> {
    let Some(deps) = Dependencies::from_env().await? else {
        info!("Sync is not configured; hooks not registered");
        return Ok(None);
    };

    hooks::register_hooks(
        dispatcher,
        deps.records.clone(),
        deps.index.clone(),
        &deps.config,
    );

    Ok(Some(deps))
}

/// Errors that can occur during plugin initialization or execution.
#[derive(Error, Debug)]
pub enum PluginError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Sync error.
    #[error("Sync error: {0}")]
    SyncError(#[from] SyncError),
}

impl PluginError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
