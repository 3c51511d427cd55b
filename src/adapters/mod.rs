//! Adapter implementations of the injectable traits.
//!
//! Production adapters live at this level; test doubles live in [`mock`].

pub mod connectivity;
pub mod mock;
pub mod reqwest_http;

pub use connectivity::{AssumeOnline, ConnectivityHandle, ConnectivityUpdater};
pub use reqwest_http::ReqwestHttpClient;
