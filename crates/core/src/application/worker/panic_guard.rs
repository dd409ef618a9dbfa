// Panic Isolation for Task Execution

use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tracing::error;

/// Result of a panic-guarded execution
#[derive(Debug)]
pub enum PanicGuardResult<T> {
    /// Execution completed (the value may itself be an Err)
    Success(T),
    /// Execution panicked; carries the panic message
    Panicked(String),
}

/// Run a future, converting a panic in its body into a value.
///
/// A panicking task must not unwind through the consumer loop; the panic
/// is caught here so the loop can report it and move on to the next poll.
pub async fn execute_guarded<F, T>(future: F) -> PanicGuardResult<T>
where
    F: Future<Output = T>,
{
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(value) => PanicGuardResult::Success(value),
        Err(panic_info) => {
            let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_info.downcast_ref::<String>() {
                s.clone()
            } else {
                "unknown panic".to_string()
            };

            error!(panic_msg = %panic_msg, "task body panicked");
            PanicGuardResult::Panicked(panic_msg)
        }
    }
}
