//! In-memory `JsonSource` for tests

use super::error::{FetchError, Result};
use super::JsonSource;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// Canned response for a URL
#[derive(Debug, Clone)]
enum MockResponse {
    Json(Value),
    Status(u16),
    Raw(String),
    Offline,
}

/// `JsonSource` that answers from a fixed URL table
///
/// Unknown URLs answer HTTP 404, like a static bucket. Every request is
/// recorded so tests can assert on the URLs that were hit.
#[derive(Debug, Default)]
pub struct MockSource {
    responses: HashMap<String, MockResponse>,
    offline: bool,
    requests: Mutex<Vec<String>>,
}

impl MockSource {
    /// Create a mock that answers 404 for everything
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock where every request fails at the transport level
    #[must_use]
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    /// Answer `url` with a JSON document
    #[must_use]
    pub fn with_json(mut self, url: impl Into<String>, value: Value) -> Self {
        self.responses.insert(url.into(), MockResponse::Json(value));
        self
    }

    /// Answer `url` with a bare HTTP status
    #[must_use]
    pub fn with_status(mut self, url: impl Into<String>, status: u16) -> Self {
        self.responses.insert(url.into(), MockResponse::Status(status));
        self
    }

    /// Answer `url` with a body that is parsed on request
    #[must_use]
    pub fn with_body(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.responses.insert(url.into(), MockResponse::Raw(body.into()));
        self
    }

    /// Fail `url` at the transport level
    #[must_use]
    pub fn with_offline(mut self, url: impl Into<String>) -> Self {
        self.responses.insert(url.into(), MockResponse::Offline);
        self
    }

    /// URLs requested so far, in order
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl JsonSource for MockSource {
    fn fetch_json(&self, url: &str) -> Result<Value> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }

        let offline = || FetchError::Transport {
            url: url.to_string(),
            message: "network unreachable".to_string(),
        };

        if self.offline {
            return Err(offline());
        }

        match self.responses.get(url) {
            Some(MockResponse::Json(value)) => Ok(value.clone()),
            Some(MockResponse::Status(status)) => Err(FetchError::Status {
                url: url.to_string(),
                status: *status,
            }),
            Some(MockResponse::Raw(body)) => {
                serde_json::from_str(body).map_err(|source| FetchError::Parse {
                    url: url.to_string(),
                    source,
                })
            }
            Some(MockResponse::Offline) => Err(offline()),
            None => Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_url_is_not_found() {
        let source = MockSource::new();
        let err = source.fetch_json("https://b.test/x.json").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_canned_responses() {
        let source = MockSource::new()
            .with_json("https://b.test/a.json", json!({"a": 1}))
            .with_status("https://b.test/b.json", 500)
            .with_body("https://b.test/c.json", "nope");

        assert_eq!(source.fetch_json("https://b.test/a.json").unwrap()["a"], 1);
        assert!(matches!(
            source.fetch_json("https://b.test/b.json"),
            Err(FetchError::Status { status: 500, .. })
        ));
        assert!(matches!(
            source.fetch_json("https://b.test/c.json"),
            Err(FetchError::Parse { .. })
        ));
        assert_eq!(source.requests().len(), 3);
    }

    #[test]
    fn test_offline_mock() {
        let source = MockSource::offline().with_json("https://b.test/a.json", json!({}));
        assert!(matches!(
            source.fetch_json("https://b.test/a.json"),
            Err(FetchError::Transport { .. })
        ));
    }
}
