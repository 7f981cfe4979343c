//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal I/O failed (raw mode, alternate screen, drawing, events)
    #[error("Terminal error: {0}")]
    IoError(#[from] std::io::Error),

    /// A background thread could not be started
    #[error("Failed to start {0} thread")]
    WorkerError(&'static str),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
