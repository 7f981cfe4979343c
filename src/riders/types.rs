//! Rider records and identity

use super::normalize::{contains_folded, slug, title_case};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Stable identity of a rider inside a directory
///
/// Uses the upstream `id` when the source provides one. Otherwise the
/// lowercased display name is combined with the birth date, and as a last
/// resort the lowercased name alone is used.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RiderId(String);

impl RiderId {
    /// Derive the identity for a normalized rider
    #[must_use]
    pub fn derive(upstream: Option<&str>, name: &str, birth_date: Option<&str>) -> Self {
        match (upstream, birth_date) {
            (Some(id), _) => Self(format!("id:{id}")),
            (None, Some(date)) => Self(format!("{}@{date}", name.to_lowercase())),
            (None, None) => Self(name.to_lowercase()),
        }
    }

    /// Borrow the identity as a string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RiderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw rider record as published in `uci_riders.json`
///
/// Only `name` is required. Everything the application does not read is kept
/// in `extra` so it can be passed through.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RiderRecord {
    /// Rider name in whatever casing the source uses
    pub name: String,
    /// Zodiac sign
    #[serde(rename = "zodiacSign", default, deserialize_with = "lenient_string")]
    pub zodiac_sign: Option<String>,
    /// Birth date, usually `YYYY-MM-DD`
    #[serde(default, deserialize_with = "lenient_string")]
    pub birth_date: Option<String>,
    /// Upstream identifier, if the source carries one
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    /// Passthrough fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Accept strings and numbers; treat null and other shapes as absent
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// A normalized rider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rider {
    /// Directory identity
    pub id: RiderId,
    /// Title-cased display name
    pub name: String,
    /// Zodiac sign, empty when the source omits it
    #[serde(rename = "zodiacSign")]
    pub zodiac_sign: String,
    /// Birth date as published
    pub birth_date: Option<String>,
    /// Fields the application does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Rider {
    /// Normalize a raw record
    #[must_use]
    pub fn from_record(record: RiderRecord) -> Self {
        let name = title_case(&record.name);
        let id = RiderId::derive(record.id.as_deref(), &name, record.birth_date.as_deref());
        Self {
            id,
            name,
            zodiac_sign: record.zodiac_sign.unwrap_or_default(),
            birth_date: record.birth_date,
            extra: record.extra,
        }
    }

    /// Convenience constructor used by tests and the CLI
    #[must_use]
    pub fn new(name: &str, zodiac_sign: &str) -> Self {
        Self::from_record(RiderRecord {
            name: name.to_string(),
            zodiac_sign: Some(zodiac_sign.to_string()),
            birth_date: None,
            id: None,
            extra: Map::new(),
        })
    }

    /// File-name slug used by the horoscope bucket
    #[must_use]
    pub fn slug(&self) -> String {
        slug(&self.name)
    }

    /// Whether the display name contains an already lowercased query
    #[must_use]
    pub fn matches(&self, query_lower: &str) -> bool {
        contains_folded(&self.name, query_lower)
    }
}

impl fmt::Display for Rider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.zodiac_sign)
    }
}
