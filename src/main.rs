//! VeloScope CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Browse riders interactively (default command)
//! veloscope
//! veloscope browse --date 2025-07-04
//!
//! # List riders, optionally filtered by a name fragment
//! veloscope riders
//! veloscope riders van
//!
//! # Print one rider's horoscope for today
//! veloscope show "Tadej Pogačar"
//!
//! # Use the bundled rider list and a local bucket
//! veloscope --offline --base-url http://localhost:9000 riders
//! ```
//!
//! # Configuration
//!
//! Settings live in `config.toml` under the user's config directory
//! (`~/.config/veloscope/config.toml` on Linux) and are created with defaults
//! on first run. Logs are written to the user's cache directory; set
//! `VELOSCOPE_LOG=debug` for more detail.

use std::process::ExitCode;
use std::sync::Arc;
use veloscope::{
    VeloscopeError,
    cli::{Cli, Commands},
    commands::{self, CommandContext},
    config::VeloscopeConfig,
    logging,
    remote::HttpSource,
    ui::{OutputWriter, StdoutWriter},
};

type Result<T> = std::result::Result<T, VeloscopeError>;

fn run(cli: &Cli, out: &StdoutWriter) -> Result<()> {
    let mut config = VeloscopeConfig::load()?;
    if let Some(base_url) = &cli.base_url {
        config.base_url.clone_from(base_url);
    }
    config.offline |= cli.offline;

    if let Some(path) = logging::default_log_path()
        && let Err(e) = logging::init(&config.log_level, &path)
    {
        out.warning(&format!("Logging disabled: {e}"));
    }
    tracing::info!(base_url = %config.base_url, offline = config.offline, "starting");

    let source = HttpSource::new(config.request_timeout())?;
    let ctx = CommandContext::new(Arc::new(source), &config);

    match cli.get_command() {
        Commands::Browse { date } => commands::browse(&ctx, date),
        Commands::Riders { query } => commands::riders(&ctx, query.as_deref(), out),
        Commands::Show { rider, date } => commands::show(&ctx, &rider, date, out),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    let out = StdoutWriter::new(cli.quiet);

    match run(&cli, &out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            out.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
