//! Fetch error taxonomy.
//!
//! Every failure of the fetch pipeline maps into [`FetchError`]. The client
//! never lets transport or decode errors escape untyped; controllers translate
//! these into a user-facing message plus a retry action. No automatic retry
//! happens anywhere in the core.

use thiserror::Error;

use crate::traits::HttpError;

/// Closed error taxonomy for feed and detail fetches.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The network path observer reported no usable path; no request was made.
    #[error("no internet connection")]
    NoConnectivity,

    /// The server answered with a status outside 200-299.
    #[error("invalid HTTP status code: {status}")]
    InvalidResponse { status: u16 },

    /// The response completed but carried no bytes.
    #[error("no data received")]
    EmptyBody,

    /// The payload decoded but the expected envelope key was absent.
    #[error("no '{key}' key found in response")]
    MissingKey { key: &'static str },

    /// The payload could not be parsed as the expected JSON shape.
    #[error("decoding error: {0}")]
    DecodeError(#[from] serde_json::Error),

    /// A lower-level I/O or protocol failure before a response arrived.
    #[error("network error: {0}")]
    TransportError(#[from] HttpError),
}

impl FetchError {
    /// Whether a user-initiated retry can plausibly succeed.
    ///
    /// The whole taxonomy is recoverable: even schema mismatches are worth a
    /// retry from the user's point of view, since the backend data may have
    /// been fixed in the meantime. Nothing here is fatal to the process.
    pub fn is_retryable(&self) -> bool {
        true
    }

    /// Message suitable for the retry alert the presentation layer shows.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::NoConnectivity => {
                "No internet connection. Please check your network and try again.".to_string()
            }
            FetchError::InvalidResponse { status } => {
                format!("The server returned an error (HTTP {status}). Please try again.")
            }
            FetchError::EmptyBody => "The server sent an empty response. Please try again.".to_string(),
            FetchError::MissingKey { .. } | FetchError::DecodeError(_) => {
                "Received an invalid response from the server. Please try again.".to_string()
            }
            FetchError::TransportError(_) => {
                "Unable to reach the server. Please check your connection and try again.".to_string()
            }
        }
    }

    /// Short stable code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::NoConnectivity => "E_FETCH_OFFLINE",
            FetchError::InvalidResponse { .. } => "E_FETCH_STATUS",
            FetchError::EmptyBody => "E_FETCH_EMPTY",
            FetchError::MissingKey { .. } => "E_FETCH_SCHEMA",
            FetchError::DecodeError(_) => "E_FETCH_DECODE",
            FetchError::TransportError(_) => "E_FETCH_TRANSPORT",
        }
    }
}
