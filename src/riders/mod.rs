//! Rider directory
//!
//! Loads the rider list, normalizes names to title case, keeps the list in
//! locale order and answers substring queries for the selection view.
//!
//! The directory starts from a snapshot compiled into the binary and is
//! replaced by the remote list once it arrives. A failed remote load is
//! logged and leaves the snapshot in place.

mod directory;
mod error;
mod loader;
mod normalize;
mod types;

pub use directory::{DirectorySource, RIDERS_PATH, RiderDirectory};
pub use error::{DirectoryError, Result};
pub use loader::DirectoryLoader;
pub use normalize::{compare_names, slug, title_case};
pub use types::{Rider, RiderId, RiderRecord};
