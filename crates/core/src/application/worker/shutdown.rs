// Cooperative Shutdown Signalling

use tokio::sync::watch;

/// Cancellation signal checked at each poll boundary.
///
/// Cancellation is an explicit, inspectable token rather than an
/// exception-style interruption: blocked `push`/`pop` calls observe it and
/// abandon their wait, and the consumer loop checks it once per poll cycle.
#[derive(Clone)]
pub struct ShutdownToken {
    rx: watch::Receiver<bool>,
}

impl ShutdownToken {
    /// Check whether shutdown was requested
    pub fn is_shutdown(&self) -> bool {
        *self.rx.borrow()
    }

    /// Wait until shutdown is requested.
    ///
    /// A sender dropped without signalling never completes this wait; only
    /// an explicit `shutdown()` does, so a lost sender is not mistaken for
    /// cancellation.
    pub async fn wait(&self) {
        let mut rx = self.rx.clone();
        loop {
            if *rx.borrow() {
                return;
            }
            if rx.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }

    /// A token that can never be signalled, for callers that opt out of
    /// cancellation.
    pub fn never() -> Self {
        let (_tx, rx) = watch::channel(false);
        Self { rx }
    }
}

/// Shutdown sender
pub struct ShutdownSender {
    tx: watch::Sender<bool>,
}

impl ShutdownSender {
    /// Signal shutdown to every listening token
    pub fn shutdown(&self) {
        let _ = self.tx.send(true);
    }

    /// Create a fresh token tied to this sender
    pub fn subscribe(&self) -> ShutdownToken {
        ShutdownToken {
            rx: self.tx.subscribe(),
        }
    }
}

/// Create a shutdown channel
pub fn shutdown_channel() -> (ShutdownSender, ShutdownToken) {
    let (tx, rx) = watch::channel(false);
    (ShutdownSender { tx }, ShutdownToken { rx })
}
