//! Data models for the posts API.
//!
//! Everything here is immutable once fetched: a new fetch replaces the whole
//! set. Liked/expanded flags are *not* part of these models; they live in
//! [`crate::domain`] and get merged in at render time.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Post identifier as delivered by the backend.
pub type PostId = i64;

/// A post summary as it appears in the feed list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedItem {
    /// Unique post identifier
    pub id: PostId,
    /// Publication time, seconds since the Unix epoch
    pub timestamp: i64,
    /// Post title
    pub title: String,
    /// Preview text; the presentation layer decides whether to clamp it
    #[serde(default)]
    pub preview_text: String,
    /// Like count reported by the server
    #[serde(default)]
    pub likes_count: u64,
}

impl FeedItem {
    /// Publication time as a chrono timestamp.
    pub fn published_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.timestamp, 0)
            .single()
            .unwrap_or_default()
    }
}

/// The full content of a single post, from the detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostDetail {
    /// Unique post identifier
    pub id: PostId,
    /// Publication time, seconds since the Unix epoch
    pub timestamp: i64,
    /// Post title
    pub title: String,
    /// Full post text
    #[serde(default)]
    pub text: String,
    /// URI of the post image; loading/caching is the image library's problem
    #[serde(default)]
    pub post_image: String,
    /// Like count reported by the server
    #[serde(default)]
    pub likes_count: u64,
}

impl PostDetail {
    /// Publication time as a chrono timestamp.
    pub fn published_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.timestamp, 0)
            .single()
            .unwrap_or_default()
    }
}

/// Top-level envelope of the feed endpoint: `{"posts": [...]}`.
///
/// `posts` is an `Option` so that an absent key decodes cleanly and can be
/// reported as a schema mismatch rather than a parse failure.
#[derive(Debug, Deserialize)]
pub(crate) struct FeedEnvelope {
    #[serde(default)]
    pub posts: Option<Vec<FeedItem>>,
}

/// Top-level envelope of the detail endpoint: `{"post": {...}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct PostEnvelope {
    #[serde(default)]
    pub post: Option<PostDetail>,
}

/// Render an epoch timestamp relative to `now`, coarsening with age.
///
/// Anything older than thirty days falls back to an absolute date.
pub fn time_ago(epoch_secs: i64, now: DateTime<Utc>) -> String {
    let elapsed = now.timestamp() - epoch_secs;
    match elapsed {
        i64::MIN..=59 => format!("{} seconds ago", elapsed.max(0)),
        60..=3599 => format!("{} minutes ago", elapsed / 60),
        3600..=86_399 => format!("{} hours ago", elapsed / 3600),
        86_400..=2_591_999 => format!("{} days ago", elapsed / 86_400),
        _ => Utc
            .timestamp_opt(epoch_secs, 0)
            .single()
            .unwrap_or_default()
            .format("%d %B %Y")
            .to_string(),
    }
}
