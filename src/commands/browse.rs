//! Browse command - interactive rider selection

use super::CommandContext;
use crate::horoscope::HoroscopeDate;
use crate::riders::{DirectoryLoader, RiderDirectory};
use crate::ui::{SelectionApp, UiError};
use crate::VeloscopeError;
use std::sync::Arc;

type Result<T> = std::result::Result<T, VeloscopeError>;

/// Execute the browse command
///
/// The view opens on the bundled snapshot immediately; the remote list
/// replaces it in the background unless the context is offline.
pub fn execute(ctx: &CommandContext, date: Option<HoroscopeDate>) -> Result<()> {
    let loader = if ctx.offline {
        tracing::info!("offline, browsing the bundled rider list");
        DirectoryLoader::disabled()
    } else {
        DirectoryLoader::spawn(Arc::clone(&ctx.source), ctx.base_url.clone())
            .map_err(|e| {
                tracing::error!(error = %e, "failed to spawn rider loader");
                UiError::WorkerError("rider loader")
            })?
    };

    let mut app = SelectionApp::new(RiderDirectory::bundled(), ctx.lookup()).with_loader(loader);
    if let Some(date) = date {
        app = app.with_date(date);
    }

    app.run()?;
    Ok(())
}
