//! Ratatui widgets for the rider selection TUI

mod help_bar;
mod help_overlay;
mod horoscope_panel;
mod rider_list;
mod search_bar;
mod status_bar;

pub use help_bar::{HelpBar, KeyHint};
pub use help_overlay::HelpOverlay;
pub use horoscope_panel::{HoroscopePanel, LOADING_TEXT};
pub use rider_list::RiderList;
pub use search_bar::{EMPTY_QUERY_PLACEHOLDER, SearchBar};
pub use status_bar::StatusBar;
