//! Host dispatcher seam.
//!
//! The host platform owns the event loop; the plugin only registers
//! callbacks. These types define that registration surface and the event
//! metadata delivered to handlers.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::SyncError;

/// Item lifecycle actions emitted by the host dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemAction {
    /// A record was created.
    Create,
    /// A record was updated.
    Update,
    /// A record was deleted.
    Delete,
}

impl ItemAction {
    /// The host platform's event name for this action.
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::Create => "items.create",
            Self::Update => "items.update",
            Self::Delete => "items.delete",
        }
    }
}

/// Event metadata delivered for one action invocation.
///
/// `keys` carries the affected record key(s) as the host supplies them
/// (strings or numbers).
#[derive(Debug, Clone)]
pub struct ActionEvent {
    pub action: ItemAction,
    pub collection: String,
    pub keys: Vec<Value>,
}

/// Callback invoked by the host dispatcher for a registered action.
///
/// Handlers observe the record store at invocation time; the host guarantees
/// per-record invocation order matches event emission order.
#[async_trait]
pub trait ActionHandler: Send + Sync {
    async fn handle(&self, event: ActionEvent) -> Result<(), SyncError>;
}

/// Registration surface onto the host platform's event dispatcher.
pub trait HookDispatcher {
    /// Register a handler for an item action on one collection.
    fn on_action(&mut self, collection: &str, action: ItemAction, handler: Arc<dyn ActionHandler>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(ItemAction::Create.event_name(), "items.create");
        assert_eq!(ItemAction::Update.event_name(), "items.update");
        assert_eq!(ItemAction::Delete.event_name(), "items.delete");
    }
}
