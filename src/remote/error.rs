//! Remote fetch error types
//!
//! Every failure a [`JsonSource`](super::JsonSource) can report. Callers in
//! the rider and horoscope layers collapse these into fallbacks, so the
//! variants exist mainly for logging.

use thiserror::Error;

/// Errors that can occur while fetching a JSON resource
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-success status
    #[error("Request for {url} returned HTTP {status}")]
    Status {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// The request never produced a response (DNS, connect, timeout, ...)
    #[error("Request for {url} failed: {message}")]
    Transport {
        /// Requested URL
        url: String,
        /// Underlying transport error
        message: String,
    },

    /// The body was not valid JSON
    #[error("Response from {url} is not valid JSON: {source}")]
    Parse {
        /// Requested URL
        url: String,
        /// Parser error
        #[source]
        source: serde_json::Error,
    },

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl FetchError {
    /// True when the server explicitly reported the resource as missing
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

/// Result type for remote operations
pub type Result<T> = std::result::Result<T, FetchError>;
