//! Merging of per-source outcomes.

use std::collections::BTreeMap;

use tracing::warn;

use crate::{AggregateResponse, SourceResult};

/// Folds per-source outcomes into one keyed response.
///
/// The merge is order-insensitive: sources are keyed by id, not by the
/// order in which they finished. Failures keep their key so callers can tell
/// "no results" apart from "source errored".
#[derive(Debug, Default)]
pub struct Aggregator;

impl Aggregator {
    /// Creates a new aggregator.
    pub fn new() -> Self {
        Self
    }

    /// Merges outcomes into a response. A repeated source id keeps the
    /// last outcome.
    pub fn merge(&self, outcomes: Vec<SourceResult>) -> AggregateResponse {
        let mut sources = BTreeMap::new();

        for outcome in outcomes {
            let source_id = outcome.source_id().to_string();
            if sources.insert(source_id.clone(), outcome).is_some() {
                warn!("Duplicate outcome for source {}, keeping the last", source_id);
            }
        }

        AggregateResponse::from_map(sources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::{ResultRecord, SearchError};

    #[test]
    fn test_merge_empty() {
        let response = Aggregator::new().merge(vec![]);
        assert!(response.is_empty());
    }

    #[test]
    fn test_merge_keeps_failures() {
        let response = Aggregator::new().merge(vec![
            SourceResult::success("google", vec![ResultRecord::new("a", "b")]),
            SourceResult::failure("coccoc", &SearchError::Timeout),
        ]);

        assert_eq!(response.len(), 2);
        assert_eq!(response.get("google").unwrap().records().unwrap().len(), 1);
        assert_eq!(
            response.get("coccoc").unwrap().error_kind(),
            Some(ErrorKind::Timeout)
        );
    }

    #[test]
    fn test_merge_is_order_insensitive() {
        let a = SourceResult::success("a", vec![ResultRecord::new("1", "1")]);
        let b = SourceResult::success("b", vec![]);

        let forward = Aggregator::new().merge(vec![a.clone(), b.clone()]);
        let backward = Aggregator::new().merge(vec![b, a]);

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_merge_preserves_record_order() {
        let records = vec![
            ResultRecord::new("first", "1"),
            ResultRecord::new("second", "2"),
            ResultRecord::new("third", "3"),
        ];
        let response = Aggregator::new().merge(vec![SourceResult::success("google", records.clone())]);
        assert_eq!(response.get("google").unwrap().records().unwrap(), records.as_slice());
    }

    #[test]
    fn test_merge_duplicate_keeps_last() {
        let response = Aggregator::new().merge(vec![
            SourceResult::success("google", vec![]),
            SourceResult::failure("google", &SearchError::Timeout),
        ]);
        assert_eq!(response.len(), 1);
        assert!(!response.get("google").unwrap().is_success());
    }
}
