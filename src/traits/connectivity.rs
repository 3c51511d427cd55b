//! Network path observation.
//!
//! The fetch pipeline consults a [`ConnectivityMonitor`] synchronously before
//! issuing any request; an unsatisfied or unknown path short-circuits the
//! fetch without touching the network.

/// Status of the current network path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathStatus {
    /// A usable network path exists
    Satisfied,
    /// No usable network path
    Unsatisfied,
    /// The observer has not yet reported
    #[default]
    Unknown,
}

/// Observer of network path availability.
///
/// Production code uses [`crate::adapters::ConnectivityHandle`], fed by the
/// embedding platform layer; tests use
/// [`crate::adapters::mock::StaticConnectivity`].
pub trait ConnectivityMonitor: Send + Sync {
    /// Current path status.
    fn status(&self) -> PathStatus;

    /// Whether a request is worth issuing right now.
    ///
    /// Only a satisfied path qualifies; an unknown path is treated as
    /// offline rather than optimistically online.
    fn is_satisfied(&self) -> bool {
        self.status() == PathStatus::Satisfied
    }
}
