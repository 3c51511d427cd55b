//! HTTP-backed implementation of [`MoviesApi`].
//!
//! Same pipeline as the posts client: connectivity guard, GET, status and
//! empty-body checks, JSON decode. The movie API has no envelope keys, so
//! there is no `MissingKey` arm here; the taxonomy is otherwise shared.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::client::decode_body;
use crate::error::FetchError;
use crate::movies::models::{GenreList, MovieDetails, MoviePage, VideoList};
use crate::movies::MoviesApi;
use crate::traits::{ConnectivityMonitor, Headers, HttpClient};

/// Client for the movie catalog API.
pub struct MoviesClient {
    base_url: String,
    api_key: String,
    http: Arc<dyn HttpClient>,
    connectivity: Arc<dyn ConnectivityMonitor>,
}

impl MoviesClient {
    /// Create a client for `base_url` authenticating with `api_key`.
    pub fn new(
        base_url: String,
        api_key: String,
        http: Arc<dyn HttpClient>,
        connectivity: Arc<dyn ConnectivityMonitor>,
    ) -> Self {
        Self {
            base_url,
            api_key,
            http,
            connectivity,
        }
    }

    /// Base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        if !self.connectivity.is_satisfied() {
            warn!(url, "movie fetch short-circuited: no network path");
            return Err(FetchError::NoConnectivity);
        }
        let response = self.http.get(url, &Headers::new()).await?;
        decode_body(&response)
    }
}

#[async_trait]
impl MoviesApi for MoviesClient {
    async fn popular(&self, page: u32) -> Result<MoviePage, FetchError> {
        let url = format!(
            "{}/movie/popular?api_key={}&page={}",
            self.base_url, self.api_key, page
        );
        let result: MoviePage = self.fetch_json(&url).await?;
        debug!(page, count = result.results.len(), "popular movies fetched");
        Ok(result)
    }

    async fn search(&self, query: &str, page: u32) -> Result<MoviePage, FetchError> {
        let url = format!(
            "{}/search/movie?api_key={}&query={}&page={}",
            self.base_url,
            self.api_key,
            urlencoding::encode(query),
            page
        );
        self.fetch_json(&url).await
    }

    async fn details(&self, id: i64) -> Result<MovieDetails, FetchError> {
        let url = format!("{}/movie/{}?api_key={}", self.base_url, id, self.api_key);
        self.fetch_json(&url).await
    }

    async fn videos(&self, id: i64) -> Result<VideoList, FetchError> {
        let url = format!(
            "{}/movie/{}/videos?api_key={}",
            self.base_url, id, self.api_key
        );
        self.fetch_json(&url).await
    }

    async fn genres(&self) -> Result<GenreList, FetchError> {
        let url = format!("{}/genre/movie/list?api_key={}", self.base_url, self.api_key);
        self.fetch_json(&url).await
    }
}
