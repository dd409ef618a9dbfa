// Central Error Type for the Library

use thiserror::Error;

use crate::domain::task::TaskError;

/// Library-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid construction parameters; the service is not usable afterward
    #[error("Configuration error: {0}")]
    Config(String),

    /// Cooperative cancellation observed while blocked in push or pop.
    /// Distinct from a poll timeout, which is a normal empty result.
    #[error("Operation cancelled")]
    Cancelled,

    /// A task body returned an error during execution
    #[error("Task execution failed: {0}")]
    Execution(#[from] TaskError),

    /// A task body panicked during execution
    #[error("Task panicked: {0}")]
    Panic(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
