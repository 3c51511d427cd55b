//! Typed events marshalled onto the UI-owning task.
//!
//! Fetches run on worker tasks; their completions arrive here, stamped with
//! the generation of the dispatch so stale completions can be dropped.
//! `LikeChanged` replaces the delegate callback the detail screen would
//! otherwise hold onto the feed screen.

use crate::error::FetchError;
use crate::models::{FeedItem, PostDetail, PostId};

/// Events delivered to the UI task's event channel.
#[derive(Debug)]
pub enum AppEvent {
    /// A feed fetch completed.
    FeedFetched {
        /// Generation of the dispatch this completion belongs to
        generation: u64,
        /// The fetched feed, or the typed failure
        result: Result<Vec<FeedItem>, FetchError>,
    },
    /// A single-post fetch completed.
    PostFetched {
        /// Generation of the dispatch this completion belongs to
        generation: u64,
        /// Post the fetch was issued for
        post_id: PostId,
        /// The fetched post, or the typed failure
        result: Result<PostDetail, FetchError>,
    },
    /// The like state of a post changed on another screen.
    LikeChanged {
        /// Post whose like state flipped
        post_id: PostId,
    },
}
