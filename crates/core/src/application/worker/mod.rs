// Consumer Wiring - run consumer loops on independent execution contexts

pub mod constants;
mod panic_guard;
mod shutdown;

pub use panic_guard::{execute_guarded, PanicGuardResult};
pub use shutdown::{shutdown_channel, ShutdownSender, ShutdownToken};

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::info;

use crate::application::service::TaskQueueService;
use crate::error::{AppError, Result};

/// Handle over one or more consumer loops sharing a single service.
///
/// The queue is the sole synchronization point, so each loop pops
/// independently and every task is delivered to exactly one of them. The
/// pool owns the shutdown channel; the loops do not self-terminate.
pub struct ConsumerPool {
    shutdown_tx: ShutdownSender,
    joins: Vec<JoinHandle<Result<()>>>,
}

impl ConsumerPool {
    /// Spawn `n` consumer loops over `service`. The reference deployment
    /// uses `n = 1`; submit calls never block waiting on task execution
    /// because the loops run on their own tokio tasks.
    pub fn spawn(n: usize, service: Arc<TaskQueueService>) -> Self {
        let (shutdown_tx, shutdown_rx) = shutdown_channel();

        let mut joins = Vec::with_capacity(n);
        for consumer_id in 0..n {
            let svc = Arc::clone(&service);
            let token = shutdown_rx.clone();

            let join = tokio::spawn(async move {
                info!(consumer_id, "consumer spawned");
                svc.run_consumer_loop(token).await
            });
            joins.push(join);
        }

        Self { shutdown_tx, joins }
    }

    /// Request shutdown without waiting. In-flight task execution is not
    /// interrupted; each loop exits at its next poll boundary and leaves
    /// queued tasks undrained.
    pub fn shutdown(&self) {
        self.shutdown_tx.shutdown();
    }

    /// Signal shutdown and wait for every loop to stop.
    pub async fn shutdown_and_join(self) -> Result<()> {
        self.shutdown_tx.shutdown();
        for join in self.joins {
            match join.await {
                Ok(result) => result?,
                Err(join_err) => {
                    return Err(AppError::Internal(format!(
                        "consumer join failed: {join_err}"
                    )));
                }
            }
        }
        Ok(())
    }
}
