// Queue Statistics Snapshot

use serde::{Deserialize, Serialize};

/// Point-in-time view of the queue plus lifetime counters.
///
/// `submitted` counts successful pushes only; a push abandoned by
/// cancellation is never counted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueStats {
    /// Tasks currently pending in the queue
    pub depth: usize,
    /// Fixed capacity of the queue
    pub capacity: usize,
    /// Tasks successfully enqueued since construction
    pub submitted: u64,
    /// Tasks executed to completion without error
    pub executed: u64,
    /// Tasks that returned an error or panicked
    pub failed: u64,
}
