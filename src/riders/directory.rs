//! The in-memory rider directory

use super::error::{DirectoryError, Result};
use super::normalize::compare_names;
use super::types::{Rider, RiderId, RiderRecord};
use crate::remote::{JsonSource, join_url};
use serde_json::Value;
use std::fmt;

/// Snapshot compiled into the binary, used until the remote list arrives
const BUNDLED_RIDERS: &str = include_str!("../../assets/riders.json");

/// Remote path of the rider list, relative to the bucket base URL
pub const RIDERS_PATH: &str = "uci_riders.json";

/// Where the current directory contents came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectorySource {
    /// Snapshot shipped with the application
    #[default]
    Bundled,
    /// Fetched from the bucket
    Remote,
}

impl fmt::Display for DirectorySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled => f.write_str("bundled"),
            Self::Remote => f.write_str("remote"),
        }
    }
}

/// Ordered collection of all known riders
///
/// Names are title-cased and the list is kept sorted by [`compare_names`].
#[derive(Debug, Clone, Default)]
pub struct RiderDirectory {
    riders: Vec<Rider>,
    source: DirectorySource,
}

impl RiderDirectory {
    /// Build a directory from already-normalized riders, sorting them
    #[must_use]
    pub fn new(mut riders: Vec<Rider>, source: DirectorySource) -> Self {
        riders.sort_by(|a, b| compare_names(&a.name, &b.name));
        Self { riders, source }
    }

    /// Normalize and sort raw JSON records
    ///
    /// Records without a string `name` are dropped.
    #[must_use]
    pub fn from_records(records: Vec<Value>, source: DirectorySource) -> Self {
        let total = records.len();
        let riders: Vec<Rider> = records
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<RiderRecord>(value) {
                Ok(record) => Some(Rider::from_record(record)),
                Err(e) => {
                    tracing::debug!(error = %e, "skipping malformed rider record");
                    None
                }
            })
            .collect();

        if riders.len() < total {
            tracing::warn!(
                kept = riders.len(),
                dropped = total - riders.len(),
                "some rider records were malformed"
            );
        }

        Self::new(riders, source)
    }

    /// Interpret a parsed document as a rider list
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::NotAnArray` if the document is not an array.
    pub fn from_json(value: Value, source: DirectorySource) -> Result<Self> {
        match value {
            Value::Array(records) => Ok(Self::from_records(records, source)),
            other => Err(DirectoryError::NotAnArray(json_kind(&other))),
        }
    }

    /// Parse the bundled snapshot
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError` if the embedded asset is not a JSON array.
    pub fn try_bundled() -> Result<Self> {
        let value: Value = serde_json::from_str(BUNDLED_RIDERS)?;
        Self::from_json(value, DirectorySource::Bundled)
    }

    /// The bundled snapshot, or an empty directory if it cannot be parsed
    #[must_use]
    pub fn bundled() -> Self {
        Self::try_bundled().unwrap_or_else(|e| {
            tracing::error!(error = %e, "bundled rider snapshot unusable");
            Self::default()
        })
    }

    /// Fetch `{base}/uci_riders.json` into a new directory
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError` on network, status or shape failures.
    pub fn fetch(source: &dyn JsonSource, base_url: &str) -> Result<Self> {
        let url = join_url(base_url, RIDERS_PATH);
        tracing::info!(%url, "fetching rider list");
        let value = source.fetch_json(&url)?;
        Self::from_json(value, DirectorySource::Remote)
    }

    /// Replace the contents with the remote list, keeping the current
    /// contents when the fetch fails
    ///
    /// Failures are logged and never returned.
    pub fn load(&mut self, source: &dyn JsonSource, base_url: &str) -> &[Rider] {
        match Self::fetch(source, base_url) {
            Ok(loaded) => {
                tracing::info!(count = loaded.len(), "rider list loaded");
                *self = loaded;
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    fallback = %self.source,
                    count = self.len(),
                    "rider list unavailable, keeping current directory"
                );
            }
        }
        &self.riders
    }

    /// Riders whose name contains `query`, case-insensitively, in order
    #[must_use]
    pub fn filter(&self, query: &str) -> Vec<&Rider> {
        self.filter_indices(query)
            .into_iter()
            .map(|idx| &self.riders[idx])
            .collect()
    }

    /// Positions of the riders matched by [`filter`](Self::filter)
    #[must_use]
    pub fn filter_indices(&self, query: &str) -> Vec<usize> {
        let needle = query.to_lowercase();
        self.riders
            .iter()
            .enumerate()
            .filter(|(_, rider)| rider.matches(&needle))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// First rider whose normalized name equals `name`, ignoring case
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Rider> {
        let wanted = name.trim().to_lowercase();
        self.riders.iter().find(|r| r.name.to_lowercase() == wanted)
    }

    /// Look up a rider by identity
    #[must_use]
    pub fn get(&self, id: &RiderId) -> Option<&Rider> {
        self.riders.iter().find(|r| &r.id == id)
    }

    /// Rider at a directory position
    #[must_use]
    pub fn rider(&self, idx: usize) -> Option<&Rider> {
        self.riders.get(idx)
    }

    /// All riders in order
    #[must_use]
    pub fn riders(&self) -> &[Rider] {
        &self.riders
    }

    /// Where the contents came from
    #[must_use]
    pub const fn source(&self) -> DirectorySource {
        self.source
    }

    /// Number of riders
    #[must_use]
    pub fn len(&self) -> usize {
        self.riders.len()
    }

    /// Whether the directory is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.riders.is_empty()
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
