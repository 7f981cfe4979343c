//! Rider selection state
//!
//! The UI-independent half of the selection view: query, candidate list,
//! selected rider and the result panel. Terminal adapters drive it through
//! [`SelectionState::set_query`], [`SelectionState::select`] and
//! [`SelectionState::apply_response`].
//!
//! # Result panel
//!
//! ```text
//!          select            response (ticket matches)
//!  Idle ───────────▶ Loading ─────────────────────────▶ Found | NotFound
//!                      ▲                                     │
//!                      └──────────── select ─────────────────┘
//! ```

mod state;

pub use state::{PanelView, SelectionState};
