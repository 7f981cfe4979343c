//! One-shot background load of the remote rider list

use super::directory::RiderDirectory;
use crate::remote::JsonSource;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

/// Pending remote directory load
///
/// Yields the loaded directory at most once. A failed load yields nothing;
/// the caller keeps whatever directory it started with.
pub struct DirectoryLoader {
    receiver: Option<Receiver<RiderDirectory>>,
}

impl DirectoryLoader {
    /// Start fetching `{base_url}/uci_riders.json` on a new thread
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the thread cannot be spawned.
    pub fn spawn(source: Arc<dyn JsonSource>, base_url: String) -> std::io::Result<Self> {
        let (tx, rx) = mpsc::channel();

        thread::Builder::new()
            .name("rider-loader".to_string())
            .spawn(move || match RiderDirectory::fetch(source.as_ref(), &base_url) {
                Ok(directory) => {
                    tracing::info!(count = directory.len(), "rider list loaded");
                    let _ = tx.send(directory);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "rider list unavailable, keeping bundled snapshot");
                }
            })?;

        Ok(Self { receiver: Some(rx) })
    }

    /// A loader that never yields, for offline sessions
    #[must_use]
    pub const fn disabled() -> Self {
        Self { receiver: None }
    }

    /// Whether the load may still deliver a directory
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.receiver.is_some()
    }

    /// Take the loaded directory if it has arrived
    pub fn poll(&mut self) -> Option<RiderDirectory> {
        let outcome = self.receiver.as_ref()?.try_recv();
        match outcome {
            Ok(directory) => {
                self.receiver = None;
                Some(directory)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.receiver = None;
                None
            }
        }
    }

    /// Wait up to `timeout` for the load to finish
    pub fn wait(&mut self, timeout: Duration) -> Option<RiderDirectory> {
        let directory = self.receiver.as_ref()?.recv_timeout(timeout).ok();
        if directory.is_some() {
            self.receiver = None;
        }
        directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::MockSource;
    use crate::riders::DirectorySource;
    use serde_json::json;

    #[test]
    fn test_loader_delivers_once() {
        let source = MockSource::new().with_json(
            "https://bucket.test/uci_riders.json",
            json!([{"name": "anna lee", "zodiacSign": "Leo"}]),
        );
        let mut loader =
            DirectoryLoader::spawn(Arc::new(source), "https://bucket.test".to_string()).unwrap();

        let directory = loader.wait(Duration::from_secs(5)).unwrap();
        assert_eq!(directory.source(), DirectorySource::Remote);
        assert_eq!(directory.riders()[0].name, "Anna Lee");
        assert!(!loader.is_pending());
        assert!(loader.poll().is_none());
    }

    #[test]
    fn test_loader_failure_yields_nothing() {
        let mut loader = DirectoryLoader::spawn(
            Arc::new(MockSource::offline()),
            "https://bucket.test".to_string(),
        )
        .unwrap();

        assert!(loader.wait(Duration::from_secs(5)).is_none());
        // The sender is gone, so polling retires the loader
        assert!(loader.poll().is_none());
        assert!(!loader.is_pending());
    }

    #[test]
    fn test_disabled_loader() {
        let mut loader = DirectoryLoader::disabled();
        assert!(!loader.is_pending());
        assert!(loader.poll().is_none());
    }
}
