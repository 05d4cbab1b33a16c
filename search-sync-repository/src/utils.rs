//! Small helpers shared by the repository implementations.

use serde_json::Value;

/// Canonical string form of a record key.
///
/// Record keys arrive as JSON values (strings for UUID-style keys, numbers
/// for serial keys). This renders either form without surrounding quotes so
/// the same key always produces the same string, whether used in a URL path
/// segment or as an equality token.
pub fn record_key_string(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
