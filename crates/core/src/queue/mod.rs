// Bounded FIFO Queue
// The only shared mutable state in the crate; every size check, append and
// remove happens under one mutex so no caller observes an intermediate
// size or ordering.

use std::collections::VecDeque;
use std::time::Duration;

use tokio::sync::{Mutex, Notify};
use tokio::time::Instant;
use tracing::debug;

use crate::application::worker::ShutdownToken;
use crate::domain::task::BoxTask;
use crate::error::{AppError, Result};

/// Fixed-capacity FIFO holding pending tasks.
///
/// Producers block in `push` while the queue is full; consumers block in
/// `pop` up to a timeout while it is empty. Enqueue order equals dequeue
/// order, and a popped task is never re-inserted.
pub struct BoundedQueue {
    items: Mutex<VecDeque<BoxTask>>,
    capacity: usize,
    /// Signalled after each successful pop
    not_full: Notify,
    /// Signalled after each successful push
    not_empty: Notify,
}

impl std::fmt::Debug for BoundedQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedQueue")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl BoundedQueue {
    /// Create a queue with a fixed capacity (`capacity >= 1`).
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity < 1 {
            return Err(AppError::Config(format!(
                "queue capacity must be at least 1, got {capacity}"
            )));
        }
        Ok(Self {
            items: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
            not_full: Notify::new(),
            not_empty: Notify::new(),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub async fn len(&self) -> usize {
        self.items.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.lock().await.is_empty()
    }

    /// Append a task at the tail, waiting for space while the queue is full.
    ///
    /// A cancellation signal observed while blocked abandons the push
    /// without enqueuing and returns `AppError::Cancelled`; the task is
    /// never silently dropped or retried.
    pub async fn push(&self, task: BoxTask, cancel: &ShutdownToken) -> Result<()> {
        let mut slot = Some(task);
        loop {
            {
                let mut items = self.items.lock().await;
                if items.len() < self.capacity {
                    if let Some(task) = slot.take() {
                        items.push_back(task);
                    }
                    let depth = items.len();
                    drop(items);
                    self.not_empty.notify_one();
                    debug!(depth, "task enqueued");
                    return Ok(());
                }
            }
            if cancel.is_shutdown() {
                return Err(AppError::Cancelled);
            }
            tokio::select! {
                _ = self.not_full.notified() => {}
                _ = cancel.wait() => return Err(AppError::Cancelled),
            }
        }
    }

    /// Remove and return the head task, waiting up to `timeout` for one to
    /// arrive.
    ///
    /// `Ok(None)` means the timeout elapsed with the queue still empty.
    /// Cancellation while blocked returns `AppError::Cancelled` instead;
    /// the two conditions are never conflated.
    pub async fn pop(&self, timeout: Duration, cancel: &ShutdownToken) -> Result<Option<BoxTask>> {
        let deadline = Instant::now() + timeout;
        loop {
            {
                let mut items = self.items.lock().await;
                if let Some(task) = items.pop_front() {
                    drop(items);
                    self.not_full.notify_one();
                    return Ok(Some(task));
                }
            }
            if cancel.is_shutdown() {
                return Err(AppError::Cancelled);
            }
            tokio::select! {
                _ = self.not_empty.notified() => {}
                _ = tokio::time::sleep_until(deadline) => return Ok(None),
                _ = cancel.wait() => return Err(AppError::Cancelled),
            }
        }
    }
}
