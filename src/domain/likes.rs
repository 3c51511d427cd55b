//! Liked-post tracking.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use tracing::debug;

use crate::models::PostId;

/// Shared handle to a [`LikeState`], single UI thread only.
pub type SharedLikes = Rc<RefCell<LikeState>>;

/// Set of posts the user has marked liked.
///
/// Memory only; reset on relaunch. Toggling twice is an involution.
#[derive(Debug, Default)]
pub struct LikeState {
    liked: HashSet<PostId>,
}

impl LikeState {
    /// Create an empty like state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shared handle to an empty like state.
    pub fn shared() -> SharedLikes {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Whether the post is currently liked.
    pub fn contains(&self, id: PostId) -> bool {
        self.liked.contains(&id)
    }

    /// Flip the liked flag: insert if absent, remove if present.
    pub fn toggle(&mut self, id: PostId) {
        if !self.liked.insert(id) {
            self.liked.remove(&id);
            debug!(post_id = id, "post unliked");
        } else {
            debug!(post_id = id, "post liked");
        }
    }

    /// Number of liked posts.
    pub fn len(&self) -> usize {
        self.liked.len()
    }

    /// Whether nothing is liked.
    pub fn is_empty(&self) -> bool {
        self.liked.is_empty()
    }
}
