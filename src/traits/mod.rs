//! Trait abstractions for injectable collaborators.
//!
//! These traits exist so the fetch pipeline can be exercised without a real
//! network: production code wires in the reqwest adapter and a live
//! connectivity handle, tests wire in mocks from [`crate::adapters::mock`].

pub mod connectivity;
pub mod http;

pub use connectivity::{ConnectivityMonitor, PathStatus};
pub use http::{Headers, HttpClient, HttpError, Response};
