//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **browse**: interactive rider selection view (default)
//! - **riders**: print the rider directory, optionally filtered
//! - **show**: print one rider's horoscope
//!
//! Global flags override the config file for a single run: `--base-url`
//! points at another bucket and `--offline` skips the remote rider list.
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use veloscope::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["veloscope", "riders", "van"]);
//! assert!(matches!(cli.get_command(), Commands::Riders { query: Some(_) }));
//! ```

use crate::horoscope::HoroscopeDate;
use clap::{Parser, Subcommand};

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "veloscope")]
#[command(about = "Daily horoscopes for professional cyclists", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Bucket to read riders and horoscopes from (overrides config)
    #[arg(long = "base-url", value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Use the bundled rider list and skip the remote one
    #[arg(long = "offline", global = true)]
    pub offline: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive rider selection view (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Look up horoscopes for this day instead of today
        #[arg(long = "date", value_name = "YYYY-MM-DD", value_parser = parse_date)]
        date: Option<HoroscopeDate>,
    },

    /// Print riders whose name contains QUERY
    #[command(visible_alias = "ls")]
    Riders {
        /// Case-insensitive substring of the rider name
        #[arg(value_name = "QUERY")]
        query: Option<String>,
    },

    /// Print the horoscope of one rider
    Show {
        /// Rider name, or a fragment matching exactly one rider
        #[arg(value_name = "RIDER")]
        rider: String,

        /// Day to look up (defaults to today)
        #[arg(long = "date", value_name = "YYYY-MM-DD", value_parser = parse_date)]
        date: Option<HoroscopeDate>,
    },
}

fn parse_date(input: &str) -> Result<HoroscopeDate, String> {
    HoroscopeDate::parse(input).ok_or_else(|| format!("'{input}' is not a YYYY-MM-DD date"))
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse { date: None })
    }
}
