//! Feed screen controller.
//!
//! Owns the ordered list of posts and derives per-row view state from the
//! shared like/expansion containers. Fetches are dispatched to worker tasks;
//! completions come back through the event channel and are applied here, on
//! the UI task, guarded by a generation counter so overlapping loads cannot
//! apply out of order.

use std::cmp::Reverse;
use std::rc::Rc;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::app::{DetailController, LoadPhase};
use crate::client::ApiClient;
use crate::domain::{SharedExpansion, SharedLikes};
use crate::events::AppEvent;
use crate::models::{FeedItem, PostId};
use crate::view_state::{row_view_state, Dirty, RowViewState};

/// Active sort applied to the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// As delivered by the server
    #[default]
    Arrival,
    /// Newest first
    ByDate,
    /// Most liked first (base count, not effective)
    ByLikes,
}

/// One feed row: the immutable item plus its arrival rank from the fetch.
///
/// The arrival rank breaks sort-key ties, which keeps repeated sorts
/// deterministic regardless of the order they run in.
#[derive(Debug, Clone)]
struct Row {
    item: FeedItem,
    arrival: usize,
}

/// Controller for the feed screen.
pub struct FeedController {
    client: Arc<ApiClient>,
    likes: SharedLikes,
    expansion: SharedExpansion,
    tx: mpsc::UnboundedSender<AppEvent>,
    phase: LoadPhase,
    rows: Vec<Row>,
    order: SortOrder,
    generation: u64,
    dirty: Dirty,
}

impl FeedController {
    /// Create a feed controller.
    ///
    /// `tx` is the UI task's event channel; the controller hands it to worker
    /// dispatches and to detail controllers created by [`select`](Self::select).
    pub fn new(
        client: Arc<ApiClient>,
        likes: SharedLikes,
        expansion: SharedExpansion,
        tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            client,
            likes,
            expansion,
            tx,
            phase: LoadPhase::default(),
            rows: Vec::new(),
            order: SortOrder::default(),
            generation: 0,
            dirty: Dirty::default(),
        }
    }

    /// Dispatch a feed fetch to a worker task.
    ///
    /// Valid from any phase: the first load, a retry after failure, or a
    /// manual refresh of loaded content. Existing rows are kept until a
    /// successful completion replaces them.
    pub fn load(&mut self) {
        self.generation += 1;
        self.phase = LoadPhase::Loading;
        self.client.spawn_fetch_feed(self.tx.clone(), self.generation);
    }

    /// Apply an event from the UI task's channel.
    ///
    /// Feed-irrelevant events (e.g. detail fetch completions) are ignored.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::FeedFetched { generation, result } => {
                if generation != self.generation {
                    debug!(
                        got = generation,
                        current = self.generation,
                        "dropping stale feed completion"
                    );
                    return;
                }
                match result {
                    Ok(items) => {
                        self.rows = items
                            .into_iter()
                            .enumerate()
                            .map(|(arrival, item)| Row { item, arrival })
                            .collect();
                        self.order = SortOrder::Arrival;
                        self.phase = LoadPhase::Loaded;
                        self.dirty.mark_all();
                        debug!(count = self.rows.len(), "feed replaced");
                    }
                    Err(err) => {
                        warn!(code = err.error_code(), "feed fetch failed");
                        self.phase = LoadPhase::Failed(err);
                    }
                }
            }
            AppEvent::LikeChanged { post_id } => {
                // reported back from the detail screen; the row derives its
                // state from the shared container, so marking dirty suffices
                if self.rows.iter().any(|r| r.item.id == post_id) {
                    self.dirty.mark_row(post_id);
                }
            }
            AppEvent::PostFetched { .. } => {}
        }
    }

    /// Current load phase.
    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    /// Active sort order.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the feed has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The item at a row index, in current display order.
    pub fn item(&self, index: usize) -> Option<&FeedItem> {
        self.rows.get(index).map(|r| &r.item)
    }

    /// Reorder newest first; ties keep arrival order.
    pub fn sort_by_date(&mut self) {
        self.rows
            .sort_by_key(|r| (Reverse(r.item.timestamp), r.arrival));
        self.order = SortOrder::ByDate;
        self.dirty.mark_all();
    }

    /// Reorder most liked first (base count); ties keep arrival order.
    pub fn sort_by_likes(&mut self) {
        self.rows
            .sort_by_key(|r| (Reverse(r.item.likes_count), r.arrival));
        self.order = SortOrder::ByLikes;
        self.dirty.mark_all();
    }

    /// Derived view state for the row at `index`, in current display order.
    pub fn row_view_state(&self, index: usize) -> Option<RowViewState> {
        self.rows.get(index).map(|r| {
            row_view_state(&r.item, &self.likes.borrow(), &self.expansion.borrow())
        })
    }

    /// Flip the liked flag for a post and mark its row dirty.
    pub fn toggle_like(&mut self, id: PostId) {
        self.likes.borrow_mut().toggle(id);
        self.dirty.mark_row(id);
    }

    /// Flip the expanded flag for a post and mark its row dirty.
    pub fn toggle_expansion(&mut self, id: PostId) {
        self.expansion.borrow_mut().toggle(id);
        self.dirty.mark_row(id);
    }

    /// Hand off to the detail screen for a post.
    ///
    /// The detail controller shares this feed's like container and event
    /// channel, so its like toggles flow back as [`AppEvent::LikeChanged`].
    pub fn select(&self, id: PostId) -> DetailController {
        DetailController::new(
            Arc::clone(&self.client),
            id,
            Rc::clone(&self.likes),
            self.tx.clone(),
        )
    }

    /// Take the accumulated dirty signal for the presentation layer.
    pub fn take_dirty(&mut self) -> Dirty {
        self.dirty.take()
    }
}
