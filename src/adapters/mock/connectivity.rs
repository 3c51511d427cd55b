//! Fixed-status connectivity monitor for tests.

use crate::traits::{ConnectivityMonitor, PathStatus};

/// Monitor pinned to a single status.
#[derive(Debug, Clone, Copy)]
pub struct StaticConnectivity(pub PathStatus);

impl StaticConnectivity {
    /// A monitor reporting a satisfied path.
    pub fn online() -> Self {
        Self(PathStatus::Satisfied)
    }

    /// A monitor reporting no usable path.
    pub fn offline() -> Self {
        Self(PathStatus::Unsatisfied)
    }
}

impl ConnectivityMonitor for StaticConnectivity {
    fn status(&self) -> PathStatus {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_online_offline() {
        assert!(StaticConnectivity::online().is_satisfied());
        assert!(!StaticConnectivity::offline().is_satisfied());
        assert!(!StaticConnectivity(PathStatus::Unknown).is_satisfied());
    }
}
