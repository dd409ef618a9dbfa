// Domain Layer - Task model and queue statistics

pub mod stats;
pub mod task;

// Re-exports
pub use stats::QueueStats;
pub use task::{task_fn, BoxTask, Task, TaskError};
