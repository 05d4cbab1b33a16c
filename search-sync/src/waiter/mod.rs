//! Bounded polling for asynchronous search-index tasks.
//!
//! Mutating index operations are acknowledged with a task handle; this
//! module polls the task's status until it reaches a terminal state or the
//! retry budget runs out.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;

use crate::errors::SyncError;
use search_sync_repository::{SearchIndexProvider, TaskHandle, TaskStatus};
use search_sync_shared::TaskOutcome;

/// Delay between status polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Additional polls allowed after the first status read.
const MAX_EXTRA_POLLS: u32 = 5;

/// Polls the search index for task completion, bounded by attempts.
///
/// At most [`MAX_EXTRA_POLLS`] polls follow the first status read (six
/// observations total). A task that is still pending when the budget runs
/// out is reported as a failure.
pub struct TaskWaiter {
    provider: Arc<dyn SearchIndexProvider>,
    poll_interval: Duration,
}

impl TaskWaiter {
    /// Create a waiter with the default poll interval.
    pub fn new(provider: Arc<dyn SearchIndexProvider>) -> Self {
        Self::with_poll_interval(provider, DEFAULT_POLL_INTERVAL)
    }

    /// Create a waiter with a custom poll interval.
    pub fn with_poll_interval(
        provider: Arc<dyn SearchIndexProvider>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            provider,
            poll_interval,
        }
    }

    /// Wait for the task to reach a terminal state.
    ///
    /// Returns a success outcome only when the task reports `succeeded`.
    /// Failed and canceled tasks resolve to a failure outcome carrying the
    /// task's error code and message when the service supplied one; so does
    /// exhausting the poll budget while the task is still pending.
    pub async fn wait(&self, task: &TaskHandle) -> TaskOutcome {
        let mut polls = 0u32;

        loop {
            let info = match self.provider.get_task(task.task_uid).await {
                Ok(info) => info,
                Err(e) => {
                    return TaskOutcome::failure(SyncError::from(e).to_string());
                }
            };

            match info.status {
                TaskStatus::Succeeded => return TaskOutcome::success(),
                TaskStatus::Failed | TaskStatus::Canceled => {
                    let message = info
                        .error
                        .map(|error| format!("{}: {}", error.code, error.message))
                        .unwrap_or_else(|| {
                            format!("task {} {}", task.task_uid, info.status)
                        });
                    return TaskOutcome::failure(message);
                }
                TaskStatus::Enqueued | TaskStatus::Processing => {
                    debug!(
                        task_uid = task.task_uid,
                        status = %info.status,
                        polls,
                        "Task still pending"
                    );
                }
            }

            if polls == MAX_EXTRA_POLLS {
                return TaskOutcome::failure(
                    SyncError::task_timeout(format!(
                        "task {} still pending after {} polls",
                        task.task_uid,
                        polls + 1
                    ))
                    .to_string(),
                );
            }

            sleep(self.poll_interval).await;
            polls += 1;
        }
    }
}
