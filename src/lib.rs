//! VeloScope - daily horoscopes for professional cyclists
//!
//! This library loads a directory of riders and their zodiac signs, lets the
//! user pick one by name and fetches that rider's horoscope for the day from
//! a static JSON bucket.
//!
//! - [`riders`] normalizes, sorts and filters the rider directory
//! - [`horoscope`] builds horoscope paths and fetches them
//! - [`selection`] tracks the query, the chosen rider and the result panel
//! - [`remote`] is the network seam (`reqwest` in production, a mock in tests)
//! - [`ui`] renders the interactive view with ratatui

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod horoscope;
pub mod logging;
pub mod remote;
pub mod riders;
pub mod selection;
pub mod ui;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum VeloscopeError {
    /// Network or document error outside the collapsed horoscope path
    #[error("Fetch error: {0}")]
    FetchError(#[from] remote::FetchError),
    /// Rider directory error
    #[error("Rider directory error: {0}")]
    DirectoryError(#[from] riders::DirectoryError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for veloscope operations
pub type Result<T> = std::result::Result<T, VeloscopeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_wraps_source() {
        let err: VeloscopeError = ui::UiError::WorkerError("horoscope").into();
        assert_eq!(err.to_string(), "UI error: Failed to start horoscope thread");

        let err = VeloscopeError::InvalidInput("No rider matches 'x'".into());
        assert_eq!(err.to_string(), "Invalid input: No rider matches 'x'");
    }

    #[test]
    fn test_fetch_error_conversion() {
        let fetch = remote::FetchError::Status {
            url: "https://bucket.test/uci_riders.json".into(),
            status: 503,
        };
        let err: VeloscopeError = fetch.into();
        assert!(matches!(err, VeloscopeError::FetchError(_)));
    }
}
