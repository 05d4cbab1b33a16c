//! Host-platform record store backend.

mod provider;

pub use provider::PlatformRecordStore;
