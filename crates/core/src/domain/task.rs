// Task Domain Model
// A task is an opaque, zero-argument unit of work, consumed on execution.

use std::future::Future;

use async_trait::async_trait;
use thiserror::Error;

/// Error carried out of a failed task body.
///
/// The core never inspects task contents, so all it can surface is the
/// message the body chose to report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TaskError(pub String);

impl From<String> for TaskError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl From<&str> for TaskError {
    fn from(msg: &str) -> Self {
        Self(msg.to_string())
    }
}

/// Unit of work executed by the consumer loop.
///
/// `execute` takes `self: Box<Self>` so a task runs at most once; there is
/// no identity, priority, or payload beyond the body itself.
#[async_trait]
pub trait Task: Send + 'static {
    async fn execute(self: Box<Self>) -> Result<(), TaskError>;
}

/// Boxed task as stored in the queue
pub type BoxTask = Box<dyn Task>;

struct FnTask<F>(F);

#[async_trait]
impl<F, Fut> Task for FnTask<F>
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = Result<(), TaskError>> + Send,
{
    async fn execute(self: Box<Self>) -> Result<(), TaskError> {
        (self.0)().await
    }
}

/// Adapt an async closure into a boxed task
pub fn task_fn<F, Fut>(f: F) -> BoxTask
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = Result<(), TaskError>> + Send,
{
    Box::new(FnTask(f))
}
