//! Screen controllers.
//!
//! Both controllers run the same load state machine:
//!
//! ```text
//! Idle -> Loading -> Loaded
//!           ^  \
//!           |   -> Failed
//!           |        |
//!           +--------+  (user-initiated retry)
//! ```
//!
//! `Loaded -> Loading` happens on manual refresh. There are no partial or
//! streaming load states. All controller state lives on the UI task; worker
//! tasks only ever report completions through the event channel.

pub mod detail;
pub mod feed;

pub use detail::DetailController;
pub use feed::{FeedController, SortOrder};

use crate::error::FetchError;

/// Load state of a screen.
#[derive(Debug, Default)]
pub enum LoadPhase {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A fetch is in flight
    Loading,
    /// The last fetch succeeded
    Loaded,
    /// The last fetch failed; retryable
    Failed(FetchError),
}

impl LoadPhase {
    /// Whether a fetch is currently in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadPhase::Loading)
    }

    /// Whether content is available to render.
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadPhase::Loaded)
    }

    /// The failure to surface, if the last fetch failed.
    pub fn failure(&self) -> Option<&FetchError> {
        match self {
            LoadPhase::Failed(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert!(matches!(LoadPhase::default(), LoadPhase::Idle));
    }

    #[test]
    fn test_predicates() {
        assert!(LoadPhase::Loading.is_loading());
        assert!(!LoadPhase::Loading.is_loaded());
        assert!(LoadPhase::Loaded.is_loaded());
        assert!(LoadPhase::Idle.failure().is_none());

        let failed = LoadPhase::Failed(FetchError::EmptyBody);
        assert!(failed.failure().is_some());
        assert!(!failed.is_loading());
    }
}
