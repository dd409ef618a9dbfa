// Failure Observer Port
// Hook through which the hosting process sees task failures. The loop
// itself never retries, re-queues, or suppresses a failed task.

use tracing::error;

use crate::error::AppError;

/// Observer notified of each task failure in the consumer loop.
///
/// Called once per failed or panicked task, after the task has been
/// consumed and before the next poll. Implementations must be cheap; the
/// loop invokes them inline.
pub trait FailureObserver: Send + Sync {
    fn on_task_failure(&self, error: &AppError);
}

/// Default observer: structured log at error level
pub struct LogFailureObserver;

impl FailureObserver for LogFailureObserver {
    fn on_task_failure(&self, error: &AppError) {
        error!(error = %error, "task execution failed");
    }
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use std::sync::Mutex;

    use super::*;

    /// Records every failure it sees, for assertions in tests
    #[derive(Default)]
    pub struct RecordingObserver {
        failures: Mutex<Vec<String>>,
    }

    impl RecordingObserver {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failure_count(&self) -> usize {
            self.failures.lock().unwrap().len()
        }

        pub fn failures(&self) -> Vec<String> {
            self.failures.lock().unwrap().clone()
        }
    }

    impl FailureObserver for RecordingObserver {
        fn on_task_failure(&self, error: &AppError) {
            self.failures.lock().unwrap().push(error.to_string());
        }
    }
}
