//! Drain-aware shutdown coordination.

use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::info;

use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::signals::wait_for_signal;

/// Owns the process's signal subscription, drain timer, and shutdown
/// broadcast.
///
/// Construct one per process, at startup; calling `spawn` more than once
/// would install duplicate signal subscriptions.
pub struct DrainCoordinator {
    drain: Duration,
    shutdown: Shutdown,
}

impl DrainCoordinator {
    pub fn new(drain: Duration) -> Self {
        Self {
            drain,
            shutdown: Shutdown::new(),
        }
    }

    /// Subscribe to the shutdown broadcast this coordinator will fire.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.shutdown.subscribe()
    }

    /// Handle to the underlying shutdown broadcast, e.g. for manual
    /// triggering in tests.
    pub fn shutdown(&self) -> &Shutdown {
        &self.shutdown
    }

    /// Install the signal listener.
    ///
    /// On the first termination signal: log it, keep serving for the drain
    /// window, then fire the shutdown broadcast. Servers subscribed to the
    /// broadcast finish in-flight work and return; exiting is then the
    /// entry point's decision.
    pub fn spawn(&self) -> JoinHandle<()> {
        let drain = self.drain;
        let shutdown = self.shutdown.clone();

        tokio::spawn(async move {
            let signal = wait_for_signal().await;
            info!(signal, drain = ?drain, "Termination signal received, draining");
            time::sleep(drain).await;
            shutdown.trigger();
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn manual_trigger_reaches_subscribers() {
        let coordinator = DrainCoordinator::new(Duration::from_secs(5));
        let mut rx = coordinator.subscribe();

        coordinator.shutdown().trigger();
        assert!(rx.recv().await.is_ok());
    }
}
