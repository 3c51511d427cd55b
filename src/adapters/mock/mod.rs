//! Test doubles for the injectable traits.

pub mod connectivity;
pub mod http;

pub use connectivity::StaticConnectivity;
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
