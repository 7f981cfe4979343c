//! Blocking HTTP implementation of `JsonSource`

use super::error::{FetchError, Result};
use super::JsonSource;
use serde_json::Value;
use std::time::Duration;

/// `JsonSource` backed by a blocking reqwest client
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::blocking::Client,
}

impl HttpSource {
    /// Build a source with an optional request timeout
    ///
    /// `None` disables the timeout entirely, so a hung request stays pending.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::ClientBuild` if the TLS backend cannot be
    /// initialized.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("veloscope/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::ClientBuild(e.to_string()))?;
        Ok(Self { client })
    }
}

impl JsonSource for HttpSource {
    fn fetch_json(&self, url: &str) -> Result<Value> {
        let transport = |e: reqwest::Error| FetchError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(transport)?;
        serde_json::from_str(&body).map_err(|source| FetchError::Parse {
            url: url.to_string(),
            source,
        })
    }
}
