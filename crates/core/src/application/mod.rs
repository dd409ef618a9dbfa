// Application Layer - Service and Consumer Wiring

pub mod service;
pub mod worker;

#[cfg(test)]
mod service_test;

// Re-exports
pub use service::TaskQueueService;
pub use worker::{shutdown_channel, ConsumerPool, ShutdownSender, ShutdownToken};
