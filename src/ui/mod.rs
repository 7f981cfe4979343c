//! Terminal front ends
//!
//! - [`ratatui_adapter`] drives the interactive selection view
//! - [`output`] prints command results and status lines for the
//!   non-interactive subcommands
//!
//! ```
//! use veloscope::ui::output::{BufferWriter, MessageLevel, OutputWriter};
//!
//! let out = BufferWriter::new();
//! out.write("Anna Lee (Leo)");
//! out.warning("rider list unavailable");
//! assert_eq!(out.lines(MessageLevel::Normal), vec!["Anna Lee (Leo)"]);
//! ```

mod error;

pub mod output;
pub mod ratatui_adapter;

pub use error::{Result, UiError};
pub use output::{BufferWriter, MessageLevel, OutputWriter, StdoutWriter};
pub use ratatui_adapter::SelectionApp;
