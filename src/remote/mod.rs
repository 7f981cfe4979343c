//! Remote JSON resources
//!
//! All network access goes through the [`JsonSource`] trait so the rider
//! directory and the horoscope lookup never talk to `reqwest` directly.
//!
//! # Implementations
//!
//! - **`HttpSource`** - blocking reqwest client used by the application
//! - **`MockSource`** - in-memory responses keyed by URL, for tests

mod error;
mod http;
mod mock;

pub use error::{FetchError, Result};
pub use http::HttpSource;
pub use mock::MockSource;

use serde_json::Value;

/// Base URL of the public horoscope bucket
pub const DEFAULT_BASE_URL: &str = "https://velo-horoscope-01.s3.eu-central-1.amazonaws.com";

/// A source of JSON documents addressed by URL
///
/// Implementations must be shareable across threads: the directory loader
/// and the horoscope worker each hold one.
pub trait JsonSource: Send + Sync {
    /// Fetch and parse the JSON document at `url`
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the request fails, the status is not a
    /// success, or the body does not parse.
    fn fetch_json(&self, url: &str) -> Result<Value>;
}

/// Join a base URL and a relative resource path with exactly one slash
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
