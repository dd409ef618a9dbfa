// Port Layer - Interfaces for external collaborators

pub mod failure_observer;

// Re-exports
pub use failure_observer::{FailureObserver, LogFailureObserver};
