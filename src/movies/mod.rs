//! Movie browser client.
//!
//! The second, smaller app in this repository: a read-only movie catalog
//! browser. Only the networking protocol surface has design content, so this
//! module is the [`MoviesApi`] trait, its wire models, and an HTTP-backed
//! implementation over the same [`crate::traits::HttpClient`] seam and
//! [`crate::error::FetchError`] taxonomy as the posts client.

pub mod client;
pub mod models;

pub use client::MoviesClient;
pub use models::{Genre, GenreList, Movie, MovieDetails, MoviePage, Video, VideoList};

use async_trait::async_trait;

use crate::error::FetchError;

/// Operations of the movie catalog API.
#[async_trait]
pub trait MoviesApi: Send + Sync {
    /// Fetch a page of currently popular movies.
    async fn popular(&self, page: u32) -> Result<MoviePage, FetchError>;

    /// Search movies by free-text query.
    async fn search(&self, query: &str, page: u32) -> Result<MoviePage, FetchError>;

    /// Fetch full details for one movie.
    async fn details(&self, id: i64) -> Result<MovieDetails, FetchError>;

    /// Fetch the videos (trailers, teasers) attached to a movie.
    async fn videos(&self, id: i64) -> Result<VideoList, FetchError>;

    /// Fetch the genre catalog.
    async fn genres(&self) -> Result<GenreList, FetchError>;
}
