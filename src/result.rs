//! Search result types.

use std::collections::BTreeMap;

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, SearchError};

/// A single normalized search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Result title.
    pub title: String,
    /// Result description/snippet.
    pub description: String,
}

impl ResultRecord {
    /// Creates a new result record.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Terminal outcome of one source for one query.
///
/// Serializes as the bare record list on success and as
/// `{"error": "<message>"}` on failure.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceResult {
    /// The source answered and its body was extracted. `records` may be empty.
    Success {
        source_id: String,
        records: Vec<ResultRecord>,
    },
    /// The source failed at the transport or parse stage.
    Failure {
        source_id: String,
        kind: ErrorKind,
        message: String,
    },
}

impl SourceResult {
    /// Creates a successful outcome.
    pub fn success(source_id: impl Into<String>, records: Vec<ResultRecord>) -> Self {
        SourceResult::Success {
            source_id: source_id.into(),
            records,
        }
    }

    /// Creates a failed outcome from a search error.
    pub fn failure(source_id: impl Into<String>, error: &SearchError) -> Self {
        SourceResult::Failure {
            source_id: source_id.into(),
            kind: error.kind(),
            message: error.to_string(),
        }
    }

    /// Returns the id of the source this outcome belongs to.
    pub fn source_id(&self) -> &str {
        match self {
            SourceResult::Success { source_id, .. } | SourceResult::Failure { source_id, .. } => {
                source_id
            }
        }
    }

    /// Returns the records on success.
    pub fn records(&self) -> Option<&[ResultRecord]> {
        match self {
            SourceResult::Success { records, .. } => Some(records),
            SourceResult::Failure { .. } => None,
        }
    }

    /// Returns the error kind on failure.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            SourceResult::Success { .. } => None,
            SourceResult::Failure { kind, .. } => Some(*kind),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SourceResult::Success { .. })
    }
}

impl Serialize for SourceResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SourceResult::Success { records, .. } => records.serialize(serializer),
            SourceResult::Failure { message, .. } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", message)?;
                map.end()
            }
        }
    }
}

/// Per-source outcomes of one aggregated search, keyed by source id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AggregateResponse {
    sources: BTreeMap<String, SourceResult>,
}

impl AggregateResponse {
    pub(crate) fn from_map(sources: BTreeMap<String, SourceResult>) -> Self {
        Self { sources }
    }

    /// Returns the outcome for a source.
    pub fn get(&self, source_id: &str) -> Option<&SourceResult> {
        self.sources.get(source_id)
    }

    /// Returns the source ids present in the response, sorted.
    pub fn source_ids(&self) -> Vec<&str> {
        self.sources.keys().map(String::as_str).collect()
    }

    /// Iterates over `(source_id, outcome)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SourceResult)> {
        self.sources.iter().map(|(id, result)| (id.as_str(), result))
    }

    /// Returns the number of sources in the response.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
