//! Rider directory error types

use crate::remote::FetchError;
use thiserror::Error;

/// Errors that can occur while building a rider directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The remote list could not be fetched
    #[error("Failed to fetch rider list: {0}")]
    Fetch(#[from] FetchError),

    /// The document parsed but is not a JSON array
    #[error("Rider list is not a JSON array (found {0})")]
    NotAnArray(&'static str),

    /// The bundled snapshot is not valid JSON
    #[error("Bundled rider snapshot is invalid: {0}")]
    Bundled(#[from] serde_json::Error),
}

/// Result type for directory operations
pub type Result<T> = std::result::Result<T, DirectoryError>;
