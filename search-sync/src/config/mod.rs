//! Configuration and dependency initialization.

mod dependencies;
pub mod settings;

pub use dependencies::Dependencies;
pub use settings::{load_sync_config, parse_settings};
