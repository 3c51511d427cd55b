//! Derived view state and dirty tracking.
//!
//! View state is a pure function of (entity, LikeState, ExpansionState) and is
//! recomputed at every render, never stored. That is what keeps the feed and
//! detail screens from ever disagreeing: both derive from the same containers.

use crate::domain::{ExpansionState, LikeState};
use crate::models::{FeedItem, PostDetail, PostId};

/// What the presentation layer needs to redraw.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Dirty {
    /// Nothing changed since the last take
    #[default]
    Nothing,
    /// Only these rows changed
    Rows(Vec<PostId>),
    /// Reload the whole list
    Everything,
}

impl Dirty {
    /// Fold a single-row change into the accumulated signal.
    pub fn mark_row(&mut self, id: PostId) {
        match self {
            Dirty::Nothing => *self = Dirty::Rows(vec![id]),
            Dirty::Rows(ids) => {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
            Dirty::Everything => {}
        }
    }

    /// Escalate to a full reload.
    pub fn mark_all(&mut self) {
        *self = Dirty::Everything;
    }

    /// Take the accumulated signal, resetting to [`Dirty::Nothing`].
    pub fn take(&mut self) -> Dirty {
        std::mem::take(self)
    }
}

/// Everything a feed row needs to render.
#[derive(Debug, Clone, PartialEq)]
pub struct RowViewState {
    /// Post identifier
    pub id: PostId,
    /// Row title
    pub title: String,
    /// Preview text; clamp to two lines unless `expanded`
    pub text: String,
    /// Publication time, seconds since the Unix epoch
    pub timestamp: i64,
    /// Whether the local user has liked this post
    pub liked: bool,
    /// Whether the row shows the unabridged preview
    pub expanded: bool,
    /// Server like count plus the local like, if any
    pub effective_likes: u64,
}

/// Derive the view state for one feed row.
pub fn row_view_state(
    item: &FeedItem,
    likes: &LikeState,
    expansion: &ExpansionState,
) -> RowViewState {
    let liked = likes.contains(item.id);
    RowViewState {
        id: item.id,
        title: item.title.clone(),
        text: item.preview_text.clone(),
        timestamp: item.timestamp,
        liked,
        expanded: expansion.contains(item.id),
        effective_likes: item.likes_count + u64::from(liked),
    }
}

/// Everything the detail screen needs to render.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailViewState {
    /// Post identifier
    pub id: PostId,
    /// Post title
    pub title: String,
    /// Full post text; the detail screen never truncates
    pub text: String,
    /// URI of the post image
    pub image_url: String,
    /// Publication time, seconds since the Unix epoch
    pub timestamp: i64,
    /// Whether the local user has liked this post
    pub liked: bool,
    /// Server like count plus the local like, if any
    pub effective_likes: u64,
}

/// Derive the view state for the detail screen.
pub fn detail_view_state(post: &PostDetail, likes: &LikeState) -> DetailViewState {
    let liked = likes.contains(post.id);
    DetailViewState {
        id: post.id,
        title: post.title.clone(),
        text: post.text.clone(),
        image_url: post.post_image.clone(),
        timestamp: post.timestamp,
        liked,
        effective_likes: post.likes_count + u64::from(liked),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: PostId, likes_count: u64) -> FeedItem {
        FeedItem {
            id,
            timestamp: 1000,
            title: "title".to_string(),
            preview_text: "preview".to_string(),
            likes_count,
        }
    }

    #[test]
    fn test_effective_likes_unliked() {
        let likes = LikeState::new();
        let expansion = ExpansionState::new();
        for base in [0u64, 1, 3, 1000] {
            let row = row_view_state(&item(1, base), &likes, &expansion);
            assert_eq!(row.effective_likes, base);
            assert!(!row.liked);
        }
    }

    #[test]
    fn test_effective_likes_liked_adds_one() {
        let mut likes = LikeState::new();
        likes.toggle(1);
        let expansion = ExpansionState::new();
        for base in [0u64, 3, 99] {
            let row = row_view_state(&item(1, base), &likes, &expansion);
            assert_eq!(row.effective_likes, base + 1);
            assert!(row.liked);
        }
    }

    #[test]
    fn test_expanded_flag_tracks_container() {
        let likes = LikeState::new();
        let mut expansion = ExpansionState::new();
        let collapsed = row_view_state(&item(2, 0), &likes, &expansion);
        assert!(!collapsed.expanded);

        expansion.toggle(2);
        let expanded = row_view_state(&item(2, 0), &likes, &expansion);
        assert!(expanded.expanded);
        // text is the full preview either way; clamping is presentation's call
        assert_eq!(collapsed.text, expanded.text);
    }

    #[test]
    fn test_detail_view_state_matches_row_derivation() {
        let mut likes = LikeState::new();
        likes.toggle(7);
        let post = PostDetail {
            id: 7,
            timestamp: 500,
            title: "T".to_string(),
            text: "full".to_string(),
            post_image: "https://img".to_string(),
            likes_count: 10,
        };
        let detail = detail_view_state(&post, &likes);
        assert_eq!(detail.effective_likes, 11);
        assert!(detail.liked);
        assert_eq!(detail.image_url, "https://img");
    }

    #[test]
    fn test_dirty_accumulates_rows() {
        let mut dirty = Dirty::default();
        dirty.mark_row(1);
        dirty.mark_row(2);
        dirty.mark_row(1);
        assert_eq!(dirty.take(), Dirty::Rows(vec![1, 2]));
        assert_eq!(dirty.take(), Dirty::Nothing);
    }

    #[test]
    fn test_dirty_everything_absorbs_rows() {
        let mut dirty = Dirty::default();
        dirty.mark_all();
        dirty.mark_row(5);
        assert_eq!(dirty.take(), Dirty::Everything);
    }
}
