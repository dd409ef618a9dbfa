// Queue Configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::worker::constants::{DEFAULT_CAPACITY, DEFAULT_POLL_INTERVAL_MS};
use crate::error::{AppError, Result};

/// Configuration for a task queue service.
///
/// Capacity is fixed for the lifetime of the service; a capacity below 1
/// is rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Maximum number of pending tasks held by the queue
    pub capacity: usize,

    /// Consumer poll interval in milliseconds. Cancellation is observed
    /// at least once per interval.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

impl QueueConfig {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval_ms = interval.as_millis() as u64;
        self
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Validate construction parameters (fail fast and loud)
    pub fn validate(&self) -> Result<()> {
        if self.capacity < 1 {
            return Err(AppError::Config(format!(
                "queue capacity must be at least 1, got {}",
                self.capacity
            )));
        }
        if self.poll_interval_ms == 0 {
            return Err(AppError::Config(
                "poll interval must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}
