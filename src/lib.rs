//! Postline - client core for a posts feed and a movie browser.
//!
//! The crate is the non-UI half of two small apps:
//!
//! - a **posts feed**: fetch a feed of posts, open one in a detail screen,
//!   toggle likes and previews, and keep both screens consistent through
//!   shared state containers and an event channel;
//! - a **movie browser**: a read-only catalog client behind the
//!   [`movies::MoviesApi`] trait.
//!
//! Networking goes through the [`traits::HttpClient`] seam so tests run
//! against a recording mock instead of the wire. All fetch failures collapse
//! into the closed [`error::FetchError`] taxonomy, and every variant is
//! retryable by reissuing the same load.

pub mod adapters;
pub mod app;
pub mod client;
pub mod domain;
pub mod error;
pub mod events;
pub mod models;
pub mod movies;
pub mod traits;
pub mod view_state;
