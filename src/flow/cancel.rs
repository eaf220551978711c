// src/flow/cancel.rs
//! Cancellation shared by the timed sequences (terminal playback, score gauge)

use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone)]
pub struct Cancellation {
    tx: Arc<watch::Sender<bool>>,
    rx: watch::Receiver<bool>,
}

impl Default for Cancellation {
    fn default() -> Self {
        Self::new()
    }
}

impl Cancellation {
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(false);
        Self {
            tx: Arc::new(tx),
            rx,
        }
    }

    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    /// Resolves once `cancel` has been called on any clone
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        // the sender lives as long as `self`, so this only returns on cancel
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::{sleep, timeout, Instant};

    #[tokio::test(start_paused = true)]
    async fn test_not_cancelled_never_resolves() {
        let cancel = Cancellation::new();
        assert!(timeout(Duration::from_secs(3), cancel.cancelled()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_from_clone_wakes_waiter() {
        let cancel = Cancellation::new();
        let other = cancel.clone();
        let start = Instant::now();

        tokio::join!(cancel.cancelled(), async {
            sleep(Duration::from_secs(1)).await;
            other.cancel();
        });

        assert!(start.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_cancel_before_wait_resolves_immediately() {
        let cancel = Cancellation::new();
        cancel.cancel();
        cancel.clone().cancelled().await;
    }
}
