//! Command implementations
//!
//! Each command is a module with an `execute` function taking a
//! [`CommandContext`] plus its parsed arguments. Output goes through an
//! [`OutputWriter`](crate::ui::OutputWriter) so commands can be exercised
//! against a buffer.

pub mod browse;
pub mod riders;
pub mod show;

pub use browse::execute as browse;
pub use riders::execute as riders;
pub use show::execute as show;

use crate::config::VeloscopeConfig;
use crate::horoscope::{DateFormat, HoroscopeLookup};
use crate::remote::JsonSource;
use crate::riders::{DirectorySource, RiderDirectory};
use crate::ui::OutputWriter;
use std::sync::Arc;

/// Where commands read riders and horoscopes from
#[derive(Clone)]
pub struct CommandContext {
    /// Network seam shared with background threads
    pub source: Arc<dyn JsonSource>,
    /// Bucket base URL
    pub base_url: String,
    /// Date segment format of horoscope paths
    pub date_format: DateFormat,
    /// Skip the remote rider list
    pub offline: bool,
}

impl CommandContext {
    /// Context for a loaded configuration
    #[must_use]
    pub fn new(source: Arc<dyn JsonSource>, config: &VeloscopeConfig) -> Self {
        Self {
            source,
            base_url: config.base_url.clone(),
            date_format: config.date_format,
            offline: config.offline,
        }
    }

    /// Horoscope lookup against this context's bucket
    #[must_use]
    pub fn lookup(&self) -> HoroscopeLookup {
        HoroscopeLookup::new(Arc::clone(&self.source), self.base_url.clone())
            .with_date_format(self.date_format)
    }

    /// The rider directory, loaded in the foreground
    ///
    /// Starts from the bundled snapshot and replaces it with the remote list
    /// unless offline. A failed remote load is reported as a warning.
    pub fn directory(&self, out: &dyn OutputWriter) -> RiderDirectory {
        let mut directory = RiderDirectory::bundled();
        if self.offline {
            return directory;
        }

        directory.load(self.source.as_ref(), &self.base_url);
        if directory.source() == DirectorySource::Bundled {
            out.warning("Rider list unavailable, using the bundled snapshot");
        }
        directory
    }
}
