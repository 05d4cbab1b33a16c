//! Processor module for the sync core.
//!
//! Transforms raw record-store records into flat, index-safe documents.

mod document_transform;

pub use document_transform::transform;
