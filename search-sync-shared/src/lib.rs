//! # Search Sync Shared
//!
//! Shared types for the collection search sync plugin: the per-collection
//! sync configuration, the flattened document shape uploaded to the search
//! index, and the outcome of waiting on an asynchronous index task.

pub mod types;

pub use types::{
    CollectionConfig, IndexDocument, SyncConfig, TaskOutcome, WritePolicy,
};
