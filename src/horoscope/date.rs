//! Calendar date segment of horoscope resource paths

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the date segment of a horoscope path is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
    /// `YYYY-MM-DD`
    #[default]
    Padded,
    /// `YYYY-M-D`, no zero padding on month or day
    Unpadded,
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Padded => f.write_str("padded"),
            Self::Unpadded => f.write_str("unpadded"),
        }
    }
}

/// The day a horoscope is requested for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HoroscopeDate(NaiveDate);

impl HoroscopeDate {
    /// Wrap a calendar date
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Today on the local clock
    #[must_use]
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Parse a `YYYY-MM-DD` (or `YYYY-M-D`) string
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
            .ok()
            .map(Self)
    }

    /// The wrapped date
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.0
    }

    /// Render the path segment
    #[must_use]
    pub fn segment(&self, format: DateFormat) -> String {
        match format {
            DateFormat::Padded => self.0.format("%Y-%m-%d").to_string(),
            DateFormat::Unpadded => {
                format!("{}-{}-{}", self.0.year(), self.0.month(), self.0.day())
            }
        }
    }
}

impl fmt::Display for HoroscopeDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segment(DateFormat::Padded))
    }
}
