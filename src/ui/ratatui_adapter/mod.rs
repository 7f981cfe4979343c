//! Ratatui front end for the rider selection view
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                SelectionApp                  │
//! │   (terminal setup, 50ms event loop, render)  │
//! └───────┬───────────────┬───────────────┬──────┘
//!         ▼               ▼               ▼
//! ┌──────────────┐ ┌─────────────┐ ┌────────────────┐
//! │  Crossterm   │ │ Directory-  │ │ Horoscope-     │
//! │  (events)    │ │ Loader      │ │ Worker         │
//! └──────────────┘ └─────────────┘ └────────────────┘
//! ```
//!
//! Background results arrive over channels and are applied to
//! [`AppState`] on the UI thread between frames.

mod app;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use app::{APP_TITLE, QUERY_PROMPT, SelectionApp, draw, render};
pub use events::{EventResult, handle_event};
pub use state::{AppState, Mode, StatusMessage};
pub use theme::Theme;
