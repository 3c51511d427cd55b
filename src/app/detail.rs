//! Detail screen controller.
//!
//! Bound to one post id at construction (the feed's `select` handoff).
//! Shares the feed's like container and event channel: toggling the like
//! here mutates the shared container and reports the change back to the
//! feed as an [`AppEvent::LikeChanged`].

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::app::LoadPhase;
use crate::client::ApiClient;
use crate::domain::SharedLikes;
use crate::events::AppEvent;
use crate::models::{PostDetail, PostId};
use crate::view_state::{detail_view_state, DetailViewState, Dirty};

/// Controller for the detail screen of a single post.
pub struct DetailController {
    client: Arc<ApiClient>,
    post_id: PostId,
    likes: SharedLikes,
    tx: mpsc::UnboundedSender<AppEvent>,
    phase: LoadPhase,
    post: Option<PostDetail>,
    generation: u64,
    dirty: Dirty,
}

impl DetailController {
    /// Create a detail controller bound to `post_id`.
    pub fn new(
        client: Arc<ApiClient>,
        post_id: PostId,
        likes: SharedLikes,
        tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            client,
            post_id,
            likes,
            tx,
            phase: LoadPhase::default(),
            post: None,
            generation: 0,
            dirty: Dirty::default(),
        }
    }

    /// The post this screen is bound to.
    pub fn post_id(&self) -> PostId {
        self.post_id
    }

    /// Current load phase.
    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    /// Dispatch the detail fetch to a worker task.
    ///
    /// Valid from any phase; also serves as the retry and the manual
    /// refresh entry point.
    pub fn load(&mut self) {
        self.generation += 1;
        self.phase = LoadPhase::Loading;
        self.client
            .spawn_fetch_post(self.post_id, self.tx.clone(), self.generation);
    }

    /// Apply an event from the UI task's channel.
    ///
    /// Only completions for this post and this controller's current
    /// generation are applied; everything else is ignored.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::PostFetched {
                generation,
                post_id,
                result,
            } => {
                if post_id != self.post_id {
                    return;
                }
                if generation != self.generation {
                    debug!(
                        got = generation,
                        current = self.generation,
                        "dropping stale detail completion"
                    );
                    return;
                }
                match result {
                    Ok(post) => {
                        self.post = Some(post);
                        self.phase = LoadPhase::Loaded;
                        self.dirty.mark_all();
                    }
                    Err(err) => {
                        warn!(post_id, code = err.error_code(), "post fetch failed");
                        self.phase = LoadPhase::Failed(err);
                    }
                }
            }
            AppEvent::FeedFetched { .. } | AppEvent::LikeChanged { .. } => {}
        }
    }

    /// Flip the liked flag for the bound post and notify the feed.
    ///
    /// Works even before the fetch completes; the flag lives in the shared
    /// container, not in the fetched document.
    pub fn toggle_like(&mut self) {
        self.likes.borrow_mut().toggle(self.post_id);
        self.dirty.mark_row(self.post_id);
        // receiver dropped means the feed screen is gone; nothing to notify
        let _ = self.tx.send(AppEvent::LikeChanged {
            post_id: self.post_id,
        });
    }

    /// Derived view state, once the post has loaded.
    pub fn view_state(&self) -> Option<DetailViewState> {
        self.post
            .as_ref()
            .map(|post| detail_view_state(post, &self.likes.borrow()))
    }

    /// Take the accumulated dirty signal for the presentation layer.
    pub fn take_dirty(&mut self) -> Dirty {
        self.dirty.take()
    }
}
