//! # Search Sync Repository
//!
//! This crate provides traits and implementations for the sync plugin's two
//! external collaborators: the search-index service and the host platform's
//! record store. It includes definitions for errors, interfaces, and concrete
//! HTTP implementations speaking the Meilisearch-protocol REST API and the
//! host platform's items REST API.

pub mod errors;
pub mod interfaces;
pub mod meilisearch;
pub mod platform;
pub mod types;
pub mod utils;

pub use errors::{RecordStoreError, SearchIndexError};
pub use interfaces::{RecordStore, SearchIndexProvider};
pub use meilisearch::MeilisearchProvider;
pub use platform::PlatformRecordStore;
pub use types::{AttributeSettings, IndexHandle, TaskError, TaskHandle, TaskInfo, TaskStatus};
pub use utils::record_key_string;
