//! Horoscope lookup
//!
//! Derives `horoscope/{date}/{slug}.json` for a rider and a day, fetches it
//! and maps the document to a [`HoroscopeResult`]. A missing document and a
//! failed request are deliberately indistinguishable: both produce `None`.
//!
//! [`HoroscopeWorker`] runs lookups off the UI thread.

mod date;
mod lookup;
mod worker;

pub use date::{DateFormat, HoroscopeDate};
pub use lookup::{EMPTY_CONTENT_TEXT, HoroscopeLookup, HoroscopeResult, NOT_FOUND_TEXT};
pub use worker::{HoroscopeRequest, HoroscopeResponse, HoroscopeWorker};
