//! Outcome of waiting on an asynchronous search-index task.

/// The resolved outcome of one asynchronous index-service operation.
///
/// Produced once per task the sync core chooses to wait on. A task that was
/// still pending when the poll budget ran out is reported as a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskOutcome {
    /// Whether the task reached the succeeded state.
    pub succeeded: bool,
    /// Failure code and message, empty on success.
    pub message: String,
}

impl TaskOutcome {
    /// A successful outcome with an empty message.
    pub fn success() -> Self {
        Self {
            succeeded: true,
            message: String::new(),
        }
    }

    /// A failure outcome carrying the given message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            message: message.into(),
        }
    }
}
