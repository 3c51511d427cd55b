//! Connectivity monitor adapters.
//!
//! [`ConnectivityHandle`] is the live monitor: a watch-channel reader whose
//! writer side is held by whatever platform layer actually observes the
//! network path. [`AssumeOnline`] is the default for environments without a
//! path observer.

use tokio::sync::watch;

use crate::traits::{ConnectivityMonitor, PathStatus};

/// Monitor that always reports a satisfied path.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeOnline;

impl ConnectivityMonitor for AssumeOnline {
    fn status(&self) -> PathStatus {
        PathStatus::Satisfied
    }
}

/// Writer side of a live connectivity channel.
///
/// Held by the platform layer; every `set` is immediately visible to all
/// [`ConnectivityHandle`] clones.
#[derive(Debug, Clone)]
pub struct ConnectivityUpdater {
    tx: watch::Sender<PathStatus>,
}

impl ConnectivityUpdater {
    /// Publish a new path status.
    pub fn set(&self, status: PathStatus) {
        // send only fails when every handle is gone; nothing to do then
        let _ = self.tx.send(status);
    }
}

/// Reader side of a live connectivity channel.
#[derive(Debug, Clone)]
pub struct ConnectivityHandle {
    rx: watch::Receiver<PathStatus>,
}

impl ConnectivityHandle {
    /// Create a connected updater/handle pair, starting at `Unknown`.
    pub fn channel() -> (ConnectivityUpdater, ConnectivityHandle) {
        let (tx, rx) = watch::channel(PathStatus::default());
        (ConnectivityUpdater { tx }, ConnectivityHandle { rx })
    }
}

impl ConnectivityMonitor for ConnectivityHandle {
    fn status(&self) -> PathStatus {
        *self.rx.borrow()
    }
}
