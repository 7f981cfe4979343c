//! Log file setup
//!
//! The interactive view owns the terminal, so `tracing` output goes to a file
//! under the user's cache directory. The filter comes from `VELOSCOPE_LOG`
//! (`EnvFilter` syntax) and falls back to the configured level.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "VELOSCOPE_LOG";

/// Default log file location
#[must_use]
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("veloscope").join("veloscope.log"))
}

/// Build the filter from the environment or `default_level`
#[must_use]
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to `path`
///
/// Returns `Ok(false)` when a subscriber was already installed.
///
/// # Errors
///
/// Returns an I/O error if the log directory or file cannot be created.
pub fn init(default_level: &str, path: &Path) -> io::Result<bool> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(build_filter(default_level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    Ok(installed)
}
