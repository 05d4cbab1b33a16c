//! Request and response types for the search-index service.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Handle to an asynchronous operation submitted to the search-index service.
///
/// Every mutating index operation (index creation, settings update, document
/// writes) is acknowledged with a task uid that can be polled for completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TaskHandle {
    /// The uid used to poll the task's status.
    #[serde(rename = "taskUid")]
    pub task_uid: u64,
}

/// Lifecycle states of an asynchronous index task.
///
/// `Succeeded`, `Failed`, and `Canceled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskStatus {
    Enqueued,
    Processing,
    Succeeded,
    Failed,
    Canceled,
}

impl TaskStatus {
    /// Whether the status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::Canceled)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Enqueued => "enqueued",
            Self::Processing => "processing",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::Canceled => "canceled",
        };
        f.write_str(name)
    }
}

/// Error payload attached to a failed index task.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

/// Status snapshot of an asynchronous index task.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskInfo {
    pub status: TaskStatus,
    #[serde(default)]
    pub error: Option<TaskError>,
}

/// Handle to an existing search index.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IndexHandle {
    /// The index name.
    pub uid: String,
    /// The primary key field the index was created with, if any.
    #[serde(rename = "primaryKey", default)]
    pub primary_key: Option<String>,
}

/// Filterable and sortable attribute lists pushed to an index's settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSettings {
    pub filterable_attributes: Vec<String>,
    pub sortable_attributes: Vec<String>,
}
