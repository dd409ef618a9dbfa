// Conveyor Core - Bounded Task Queue Service
// Single-process, in-memory only: no persistence, no network surface

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
pub mod queue;

pub use application::{
    shutdown_channel, ConsumerPool, ShutdownSender, ShutdownToken, TaskQueueService,
};
pub use config::QueueConfig;
pub use domain::{task_fn, BoxTask, QueueStats, Task, TaskError};
pub use error::{AppError, Result};
pub use queue::BoundedQueue;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
