//! Shutdown coordination for the bookstore server.

use tokio::sync::broadcast;

use crate::lifecycle::signals::termination_signal;

/// Coordinator for graceful shutdown.
///
/// Tests and embedders trigger it directly; the binary relies on OS signals,
/// which `wait_for_shutdown` also listens for.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve when `rx` fires, its sender is dropped, or the process is asked
/// to terminate.
pub async fn wait_for_shutdown(mut rx: broadcast::Receiver<()>) {
    tokio::select! {
        _ = rx.recv() => {
            tracing::info!("Shutdown requested");
        }
        _ = termination_signal() => {
            tracing::info!("Shutdown signal received");
        }
    }
}
