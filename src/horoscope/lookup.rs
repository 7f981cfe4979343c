//! Horoscope retrieval for a rider and a day

use super::date::{DateFormat, HoroscopeDate};
use crate::remote::{JsonSource, join_url};
use crate::riders::Rider;
use serde::Deserialize;
use std::sync::Arc;

/// Text shown on a card whose horoscope body is empty
pub const EMPTY_CONTENT_TEXT: &str = "No horoscope available.";
/// Text shown when a lookup settles without a horoscope
pub const NOT_FOUND_TEXT: &str = "No horoscope found for today.";

/// A horoscope ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoroscopeResult {
    /// Display name of the rider it was fetched for
    pub rider_name: String,
    /// Rider's zodiac sign
    pub sign: String,
    /// Horoscope text; `None` when the document carried an empty body
    pub content: Option<String>,
    /// Day the horoscope belongs to
    pub date: HoroscopeDate,
}

impl HoroscopeResult {
    /// Card heading, e.g. `Anna Lee (Leo)`
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} ({})", self.rider_name, self.sign)
    }

    /// Card body, falling back to a placeholder for empty content
    #[must_use]
    pub fn body(&self) -> &str {
        self.content.as_deref().unwrap_or(EMPTY_CONTENT_TEXT)
    }
}

/// Shape of `horoscope/{date}/{slug}.json`
#[derive(Debug, Deserialize)]
struct HoroscopeDocument {
    horoscope: String,
}

/// Builds horoscope URLs and fetches them through a `JsonSource`
#[derive(Clone)]
pub struct HoroscopeLookup {
    source: Arc<dyn JsonSource>,
    base_url: String,
    date_format: DateFormat,
}

impl HoroscopeLookup {
    /// Create a lookup against a bucket base URL
    #[must_use]
    pub fn new(source: Arc<dyn JsonSource>, base_url: impl Into<String>) -> Self {
        Self {
            source,
            base_url: base_url.into(),
            date_format: DateFormat::default(),
        }
    }

    /// Choose the date segment format
    #[must_use]
    pub const fn with_date_format(mut self, date_format: DateFormat) -> Self {
        self.date_format = date_format;
        self
    }

    /// Resource path relative to the base URL
    #[must_use]
    pub fn resource_path(&self, rider: &Rider, date: HoroscopeDate) -> String {
        format!(
            "horoscope/{}/{}.json",
            date.segment(self.date_format),
            rider.slug()
        )
    }

    /// Absolute URL of a rider's horoscope for `date`
    #[must_use]
    pub fn resource_url(&self, rider: &Rider, date: HoroscopeDate) -> String {
        join_url(&self.base_url, &self.resource_path(rider, date))
    }

    /// Fetch the horoscope for `rider` on `date`
    ///
    /// Every failure (missing document, bad status, network error, unexpected
    /// shape) yields `None`; the cause is only logged.
    #[must_use]
    pub fn fetch_for(&self, rider: &Rider, date: HoroscopeDate) -> Option<HoroscopeResult> {
        let url = self.resource_url(rider, date);
        tracing::debug!(%url, rider = %rider.name, "fetching horoscope");

        let value = match self.source.fetch_json(&url) {
            Ok(value) => value,
            Err(e) if e.is_not_found() => {
                tracing::info!(rider = %rider.name, %date, "no horoscope published");
                return None;
            }
            Err(e) => {
                tracing::warn!(error = %e, rider = %rider.name, "horoscope fetch failed");
                return None;
            }
        };

        let document: HoroscopeDocument = match serde_json::from_value(value) {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!(error = %e, %url, "horoscope document has no usable text");
                return None;
            }
        };

        let content = Some(document.horoscope).filter(|text| !text.is_empty());
        Some(HoroscopeResult {
            rider_name: rider.name.clone(),
            sign: rider.zodiac_sign.clone(),
            content,
            date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::MockSource;
    use chrono::NaiveDate;
    use serde_json::json;

    const BASE: &str = "https://bucket.test";

    fn day() -> HoroscopeDate {
        HoroscopeDate::new(NaiveDate::from_ymd_opt(2025, 7, 4).unwrap())
    }

    fn lookup(source: MockSource) -> HoroscopeLookup {
        HoroscopeLookup::new(Arc::new(source), BASE)
    }

    #[test]
    fn test_resource_url_formats() {
        let rider = Rider::new("anna lee", "Leo");
        let padded = lookup(MockSource::new());
        assert_eq!(
            padded.resource_url(&rider, day()),
            "https://bucket.test/horoscope/2025-07-04/anna_lee.json"
        );

        let unpadded = lookup(MockSource::new()).with_date_format(DateFormat::Unpadded);
        assert_eq!(
            unpadded.resource_url(&rider, day()),
            "https://bucket.test/horoscope/2025-7-4/anna_lee.json"
        );
    }

    #[test]
    fn test_fetch_for_success() {
        let source = MockSource::new().with_json(
            "https://bucket.test/horoscope/2025-07-04/anna_lee.json",
            json!({"horoscope": "Attack on the final climb.", "generated": "x"}),
        );
        let rider = Rider::new("Anna Lee", "LeoSign");

        let result = lookup(source).fetch_for(&rider, day()).unwrap();
        assert_eq!(result.title(), "Anna Lee (LeoSign)");
        assert_eq!(result.body(), "Attack on the final climb.");
        assert_eq!(result.date, day());
    }

    #[test]
    fn test_fetch_for_empty_body_uses_placeholder() {
        let source = MockSource::new().with_json(
            "https://bucket.test/horoscope/2025-07-04/anna_lee.json",
            json!({"horoscope": ""}),
        );
        let result = lookup(source)
            .fetch_for(&Rider::new("Anna Lee", "Leo"), day())
            .unwrap();
        assert!(result.content.is_none());
        assert_eq!(result.body(), EMPTY_CONTENT_TEXT);
    }

    #[test]
    fn test_fetch_for_whitespace_body_is_kept() {
        let source = MockSource::new().with_json(
            "https://bucket.test/horoscope/2025-07-04/anna_lee.json",
            json!({"horoscope": "  "}),
        );
        let result = lookup(source)
            .fetch_for(&Rider::new("Anna Lee", "Leo"), day())
            .unwrap();
        assert_eq!(result.content.as_deref(), Some("  "));
        assert_eq!(result.body(), "  ");
    }

    #[test]
    fn test_fetch_for_failures_collapse_to_none() {
        let rider = Rider::new("Anna Lee", "Leo");
        let url = "https://bucket.test/horoscope/2025-07-04/anna_lee.json";

        assert!(lookup(MockSource::new()).fetch_for(&rider, day()).is_none());
        assert!(lookup(MockSource::offline()).fetch_for(&rider, day()).is_none());
        assert!(
            lookup(MockSource::new().with_status(url, 500))
                .fetch_for(&rider, day())
                .is_none()
        );
        assert!(
            lookup(MockSource::new().with_body(url, "<xml/>"))
                .fetch_for(&rider, day())
                .is_none()
        );
        assert!(
            lookup(MockSource::new().with_json(url, json!({"text": "wrong key"})))
                .fetch_for(&rider, day())
                .is_none()
        );
        assert!(
            lookup(MockSource::new().with_json(url, json!({"horoscope": 7})))
                .fetch_for(&rider, day())
                .is_none()
        );
    }
}
