// Unit tests for TaskQueueService construction and loop policy

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::application::service::TaskQueueService;
use crate::application::worker::shutdown_channel;
use crate::config::QueueConfig;
use crate::domain::task::task_fn;
use crate::error::AppError;
use crate::port::failure_observer::mocks::RecordingObserver;
use crate::port::failure_observer::FailureObserver;

#[test]
fn test_invalid_capacity_fails_construction() {
    let result = TaskQueueService::new(QueueConfig::new(0));
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[tokio::test]
async fn test_submit_updates_counters_and_depth() {
    let service = TaskQueueService::new(QueueConfig::new(4)).unwrap();

    service.submit(task_fn(|| async { Ok(()) })).await.unwrap();
    service.submit(task_fn(|| async { Ok(()) })).await.unwrap();

    assert_eq!(service.depth().await, 2);
    let stats = service.stats().await;
    assert_eq!(stats.submitted, 2);
    assert_eq!(stats.executed, 0);
    assert_eq!(stats.capacity, 4);
}

#[tokio::test]
async fn test_loop_exits_immediately_when_already_cancelled() {
    let service = TaskQueueService::new(QueueConfig::new(4)).unwrap();
    let ran = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&ran);

    service
        .submit(task_fn(move || async move {
            flag.store(true, Ordering::SeqCst);
            Ok(())
        }))
        .await
        .unwrap();

    let (shutdown_tx, shutdown_rx) = shutdown_channel();
    shutdown_tx.shutdown();

    service.run_consumer_loop(shutdown_rx).await.unwrap();

    // Queued work is left undrained on cancellation
    assert!(!ran.load(Ordering::SeqCst));
    assert_eq!(service.depth().await, 1);
}

#[tokio::test]
async fn test_failed_task_reported_and_loop_continues() {
    let observer = Arc::new(RecordingObserver::new());
    let observer_dyn: Arc<dyn FailureObserver> = observer.clone();
    let config = QueueConfig::new(4).with_poll_interval(Duration::from_millis(20));
    let service = Arc::new(TaskQueueService::with_observer(config, observer_dyn).unwrap());

    let ran_after_failure = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&ran_after_failure);

    service
        .submit(task_fn(|| async { Err("deliberate failure".into()) }))
        .await
        .unwrap();
    service
        .submit(task_fn(move || async move {
            flag.store(true, Ordering::SeqCst);
            Ok(())
        }))
        .await
        .unwrap();

    let (shutdown_tx, shutdown_rx) = shutdown_channel();
    let svc = Arc::clone(&service);
    let handle = tokio::spawn(async move { svc.run_consumer_loop(shutdown_rx).await });

    // Wait for both tasks to be consumed
    for _ in 0..100 {
        let stats = service.stats().await;
        if stats.executed + stats.failed == 2 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    shutdown_tx.shutdown();
    handle.await.unwrap().unwrap();

    assert!(ran_after_failure.load(Ordering::SeqCst));
    assert_eq!(observer.failure_count(), 1);
    assert!(observer.failures()[0].contains("deliberate failure"));

    let stats = service.stats().await;
    assert_eq!(stats.executed, 1);
    assert_eq!(stats.failed, 1);
}
