//! Error types for the sync core.

use thiserror::Error;

use search_sync_repository::{RecordStoreError, SearchIndexError};

/// Errors that can occur while synchronizing records with the search index.
///
/// An incomplete configuration is not an error anywhere in the plugin; it is
/// treated as "sync disabled" and handled as a silent no-op.
#[derive(Error, Debug)]
pub enum SyncError {
    /// The collection's index could not be created or did not become ready.
    #[error("Index unavailable: {0}")]
    IndexUnavailable(String),

    /// A task did not reach a terminal success state within the poll budget.
    #[error("Task timed out: {0}")]
    TaskTimeout(String),

    /// A record-store read failed.
    #[error("Record fetch failed: {0}")]
    RecordFetch(#[from] RecordStoreError),

    /// A search-index operation failed.
    #[error("Search index error: {0}")]
    SearchIndex(#[from] SearchIndexError),
}

impl SyncError {
    /// Create an index-unavailable error.
    pub fn index_unavailable(msg: impl Into<String>) -> Self {
        Self::IndexUnavailable(msg.into())
    }

    /// Create a task-timeout error.
    pub fn task_timeout(msg: impl Into<String>) -> Self {
        Self::TaskTimeout(msg.into())
    }
}
