//! Expanded-row tracking.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use tracing::debug;

use crate::models::PostId;

/// Shared handle to an [`ExpansionState`], single UI thread only.
pub type SharedExpansion = Rc<RefCell<ExpansionState>>;

/// Set of posts whose feed row shows the unabridged preview text.
///
/// Independent of [`crate::domain::LikeState`]; same process lifetime.
#[derive(Debug, Default)]
pub struct ExpansionState {
    expanded: HashSet<PostId>,
}

impl ExpansionState {
    /// Create an empty expansion state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shared handle to an empty expansion state.
    pub fn shared() -> SharedExpansion {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Whether the post's row is expanded.
    pub fn contains(&self, id: PostId) -> bool {
        self.expanded.contains(&id)
    }

    /// Flip the expanded flag: insert if absent, remove if present.
    pub fn toggle(&mut self, id: PostId) {
        if !self.expanded.insert(id) {
            self.expanded.remove(&id);
        }
        debug!(post_id = id, expanded = self.contains(id), "row expansion toggled");
    }

    /// Number of expanded rows.
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    /// Whether nothing is expanded.
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}
