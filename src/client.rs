//! API client for the posts backend.
//!
//! Two GET endpoints: the feed list and a per-id detail document. Every
//! failure maps into the closed [`FetchError`] taxonomy; nothing is raised
//! past this boundary. Connectivity is checked synchronously before each
//! call, so an offline fetch never touches the network.
//!
//! The spawn methods are the explicit worker-dispatch contract: they run the
//! fetch on the runtime and deliver the completion as an [`AppEvent`] on the
//! channel the UI task drains. Workers never touch shared state.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::events::AppEvent;
use crate::models::{FeedEnvelope, FeedItem, PostDetail, PostEnvelope, PostId};
use crate::traits::{ConnectivityMonitor, Headers, HttpClient, Response};

/// Default base URL of the posts API.
pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com/anton-natife/jsons/master/api";

/// Client for the posts API.
pub struct ApiClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
    connectivity: Arc<dyn ConnectivityMonitor>,
}

impl ApiClient {
    /// Create a client against the default base URL.
    pub fn new(http: Arc<dyn HttpClient>, connectivity: Arc<dyn ConnectivityMonitor>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string(), http, connectivity)
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(
        base_url: String,
        http: Arc<dyn HttpClient>,
        connectivity: Arc<dyn ConnectivityMonitor>,
    ) -> Self {
        Self {
            base_url,
            http,
            connectivity,
        }
    }

    /// Base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn feed_url(&self) -> String {
        format!("{}/main.json", self.base_url)
    }

    fn post_url(&self, id: PostId) -> String {
        format!("{}/posts/{}.json", self.base_url, id)
    }

    /// Fetch the ordered feed of post summaries.
    ///
    /// Requires a top-level `"posts"` key in the response.
    pub async fn fetch_feed(&self) -> Result<Vec<FeedItem>, FetchError> {
        let url = self.feed_url();
        let envelope: FeedEnvelope = self.fetch_json(&url).await?;
        let posts = envelope
            .posts
            .ok_or(FetchError::MissingKey { key: "posts" })?;
        debug!(count = posts.len(), "feed fetched");
        Ok(posts)
    }

    /// Fetch the full content of a single post.
    ///
    /// Requires a top-level `"post"` key in the response.
    pub async fn fetch_post(&self, id: PostId) -> Result<PostDetail, FetchError> {
        let url = self.post_url(id);
        let envelope: PostEnvelope = self.fetch_json(&url).await?;
        let post = envelope.post.ok_or(FetchError::MissingKey { key: "post" })?;
        debug!(post_id = post.id, "post fetched");
        Ok(post)
    }

    /// Run `fetch_feed` on a worker task and post the completion, stamped
    /// with `generation`, onto the UI event channel.
    pub fn spawn_fetch_feed(self: &Arc<Self>, tx: mpsc::UnboundedSender<AppEvent>, generation: u64) {
        let client = Arc::clone(self);
        debug!(generation, "dispatching feed fetch");
        tokio::spawn(async move {
            let result = client.fetch_feed().await;
            // receiver dropped means the screen is gone; drop the result
            let _ = tx.send(AppEvent::FeedFetched { generation, result });
        });
    }

    /// Run `fetch_post` on a worker task and post the completion, stamped
    /// with `generation`, onto the UI event channel.
    pub fn spawn_fetch_post(
        self: &Arc<Self>,
        post_id: PostId,
        tx: mpsc::UnboundedSender<AppEvent>,
        generation: u64,
    ) {
        let client = Arc::clone(self);
        debug!(post_id, generation, "dispatching post fetch");
        tokio::spawn(async move {
            let result = client.fetch_post(post_id).await;
            let _ = tx.send(AppEvent::PostFetched {
                generation,
                post_id,
                result,
            });
        });
    }

    /// Shared GET pipeline: connectivity guard, transport, status check,
    /// empty-body check, JSON decode.
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        if !self.connectivity.is_satisfied() {
            warn!(url, "fetch short-circuited: no network path");
            return Err(FetchError::NoConnectivity);
        }

        let response = self.http.get(url, &Headers::new()).await?;
        decode_body(&response)
    }
}

/// Map a raw response into a decoded body or the matching [`FetchError`].
///
/// Shared between the posts client and the movies client.
pub(crate) fn decode_body<T: DeserializeOwned>(response: &Response) -> Result<T, FetchError> {
    if !response.is_success() {
        return Err(FetchError::InvalidResponse {
            status: response.status,
        });
    }
    if response.body.is_empty() {
        return Err(FetchError::EmptyBody);
    }
    response.json().map_err(FetchError::from)
}
