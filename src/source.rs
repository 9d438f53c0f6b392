//! Per-source failure isolation.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::time::timeout;
use tracing::{debug, warn};

use crate::{Engine, SearchError, SearchQuery, SourceResult};

/// Runs one engine under its own time budget and folds every outcome into a
/// [`SourceResult`].
///
/// `search` never returns an error: transport and parse failures become
/// `SourceResult::Failure` tagged with this source's id, so one backend
/// cannot take down an aggregated search.
#[derive(Clone)]
pub struct SourceClient {
    engine: Arc<dyn Engine>,
    timeout: Duration,
}

impl SourceClient {
    /// Wraps an engine, using the engine's configured timeout.
    pub fn new(engine: Arc<dyn Engine>) -> Self {
        let timeout = Duration::from_secs(engine.config().timeout);
        Self { engine, timeout }
    }

    /// Overrides the time budget.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the source id (the engine shortcut).
    pub fn source_id(&self) -> &str {
        self.engine.shortcut()
    }

    /// Returns the wrapped engine.
    pub fn engine(&self) -> &Arc<dyn Engine> {
        &self.engine
    }

    /// Searches this source. Always resolves within the time budget.
    pub async fn search(&self, query: &SearchQuery) -> SourceResult {
        let source_id = self.source_id();
        let start = Instant::now();

        let outcome = match timeout(self.timeout, self.engine.search(query)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(SearchError::Timeout),
        };

        match outcome {
            Ok(records) => {
                debug!(
                    "Source {} returned {} results in {}ms",
                    source_id,
                    records.len(),
                    start.elapsed().as_millis()
                );
                SourceResult::success(source_id, records)
            }
            Err(e) => {
                warn!("Source {} failed: {}", source_id, e);
                SourceResult::failure(source_id, &e)
            }
        }
    }
}
