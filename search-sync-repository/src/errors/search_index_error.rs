//! Search index error types.
//!
//! This module defines the unified error type for all search-index
//! operations, covering connection setup, document writes, index creation,
//! and task-status reads.

use thiserror::Error;

/// Unified errors from search-index operations.
///
/// Used by the `SearchIndexProvider` trait for all index-service operations.
#[derive(Debug, Clone, Error)]
pub enum SearchIndexError {
    /// Failed to establish a connection to the search-index service.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Failed to create a search index.
    #[error("Index creation error: {0}")]
    IndexCreationError(String),

    /// Failed to upsert documents.
    #[error("Upsert error: {0}")]
    UpsertError(String),

    /// Failed to delete a document or clear an index.
    #[error("Delete error: {0}")]
    DeleteError(String),

    /// Failed to update index attribute settings.
    #[error("Settings error: {0}")]
    SettingsError(String),

    /// Failed to read the status of an asynchronous task.
    #[error("Task status error: {0}")]
    TaskStatusError(String),

    /// Failed to parse a response from the search-index service.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Failed to serialize a request for the search-index service.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl SearchIndexError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create an index creation error.
    pub fn index_creation(msg: impl Into<String>) -> Self {
        Self::IndexCreationError(msg.into())
    }

    /// Create an upsert error.
    pub fn upsert(msg: impl Into<String>) -> Self {
        Self::UpsertError(msg.into())
    }

    /// Create a delete error.
    pub fn delete(msg: impl Into<String>) -> Self {
        Self::DeleteError(msg.into())
    }

    /// Create a settings error.
    pub fn settings(msg: impl Into<String>) -> Self {
        Self::SettingsError(msg.into())
    }

    /// Create a task status error.
    pub fn task_status(msg: impl Into<String>) -> Self {
        Self::TaskStatusError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }
}
