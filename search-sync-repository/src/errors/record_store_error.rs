//! Record store error types.

use thiserror::Error;

/// Errors from host-platform record-store reads.
///
/// The record store is read-only for the sync core, so every variant concerns
/// fetching or decoding records.
#[derive(Debug, Clone, Error)]
pub enum RecordStoreError {
    /// Failed to reach the record store.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The record store rejected or failed a read request.
    #[error("Read error: {0}")]
    ReadError(String),

    /// Failed to parse a record-store response.
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl RecordStoreError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a read error.
    pub fn read(msg: impl Into<String>) -> Self {
        Self::ReadError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }
}
