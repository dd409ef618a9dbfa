// Task Queue Service - public API over the bounded queue

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::application::worker::{execute_guarded, PanicGuardResult, ShutdownToken};
use crate::config::QueueConfig;
use crate::domain::stats::QueueStats;
use crate::domain::task::BoxTask;
use crate::error::{AppError, Result};
use crate::port::failure_observer::{FailureObserver, LogFailureObserver};
use crate::queue::BoundedQueue;

/// Bounded producer/consumer task queue service.
///
/// Owns exactly one queue for its lifetime. Any number of producers may
/// `submit` concurrently; one or more consumer loops drain the queue until
/// explicitly cancelled. Entirely in-memory, process-lifetime only.
pub struct TaskQueueService {
    queue: BoundedQueue,
    poll_interval: Duration,
    observer: Arc<dyn FailureObserver>,
    submitted: AtomicU64,
    executed: AtomicU64,
    failed: AtomicU64,
}

impl TaskQueueService {
    /// Create a service with the default failure observer (tracing log).
    pub fn new(config: QueueConfig) -> Result<Self> {
        Self::with_observer(config, Arc::new(LogFailureObserver))
    }

    /// Create a service with a caller-supplied failure observer.
    pub fn with_observer(config: QueueConfig, observer: Arc<dyn FailureObserver>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            queue: BoundedQueue::new(config.capacity)?,
            poll_interval: config.poll_interval(),
            observer,
            submitted: AtomicU64::new(0),
            executed: AtomicU64::new(0),
            failed: AtomicU64::new(0),
        })
    }

    /// Enqueue a task, waiting while the queue is full.
    ///
    /// The task is never silently dropped: the call either enqueues it or
    /// stays blocked until space appears.
    pub async fn submit(&self, task: BoxTask) -> Result<()> {
        self.submit_with_cancel(task, &ShutdownToken::never()).await
    }

    /// Enqueue a task with caller-side cancellation. A signal delivered to
    /// `cancel` while the caller is blocked abandons the push without
    /// enqueuing and returns `AppError::Cancelled`.
    pub async fn submit_with_cancel(&self, task: BoxTask, cancel: &ShutdownToken) -> Result<()> {
        self.queue.push(task, cancel).await?;
        self.submitted.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    /// Run the consumer loop until `shutdown` is signalled.
    ///
    /// Tasks execute sequentially on the calling context, in enqueue
    /// order, at most once each. A failing or panicking task is reported
    /// to the failure observer and the loop moves on to the next poll; it
    /// never retries or re-queues. On cancellation the loop exits cleanly
    /// without draining remaining tasks. No timeout is placed on task
    /// execution itself; a task that never returns stalls the loop.
    pub async fn run_consumer_loop(&self, shutdown: ShutdownToken) -> Result<()> {
        info!(
            poll_interval_ms = self.poll_interval.as_millis() as u64,
            capacity = self.queue.capacity(),
            "consumer loop started"
        );
        loop {
            if shutdown.is_shutdown() {
                break;
            }
            match self.queue.pop(self.poll_interval, &shutdown).await {
                Ok(Some(task)) => self.execute_task(task).await,
                // Poll timeout with nothing queued; re-check shutdown
                Ok(None) => continue,
                Err(AppError::Cancelled) => break,
                Err(e) => return Err(e),
            }
        }
        info!("consumer loop stopped");
        Ok(())
    }

    async fn execute_task(&self, task: BoxTask) {
        match execute_guarded(task.execute()).await {
            PanicGuardResult::Success(Ok(())) => {
                self.executed.fetch_add(1, Ordering::Relaxed);
                debug!("task executed");
            }
            PanicGuardResult::Success(Err(task_err)) => {
                self.failed.fetch_add(1, Ordering::Relaxed);
                self.observer.on_task_failure(&AppError::Execution(task_err));
            }
            PanicGuardResult::Panicked(panic_msg) => {
                self.failed.fetch_add(1, Ordering::Relaxed);
                self.observer.on_task_failure(&AppError::Panic(panic_msg));
            }
        }
    }

    /// Number of tasks currently pending
    pub async fn depth(&self) -> usize {
        self.queue.len().await
    }

    pub fn capacity(&self) -> usize {
        self.queue.capacity()
    }

    /// Snapshot of queue state and lifetime counters
    pub async fn stats(&self) -> QueueStats {
        QueueStats {
            depth: self.queue.len().await,
            capacity: self.queue.capacity(),
            submitted: self.submitted.load(Ordering::Relaxed),
            executed: self.executed.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
        }
    }
}
