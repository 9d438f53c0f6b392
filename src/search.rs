//! Search orchestration.

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::future::join_all;
use tracing::{debug, warn};

use crate::diagnostics::{Diagnostics, DirDiagnostics, LogDiagnostics};
use crate::engines::{Coccoc, Google};
use crate::fetcher::PageFetcher;
use crate::{
    AggregateResponse, Aggregator, Engine, HttpFetcher, Result, SearchConfig, SearchError,
    SearchQuery, SourceClient,
};

/// Fans a query out to every configured source and merges the outcomes.
pub struct Search {
    sources: Vec<SourceClient>,
    aggregator: Aggregator,
}

impl Search {
    /// Creates a search with no sources.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            aggregator: Aggregator::new(),
        }
    }

    /// Builds one fetcher and one engine per configured source.
    pub fn from_config(config: &SearchConfig) -> Result<Self> {
        config.validate()?;

        let diagnostics: Arc<dyn Diagnostics> = match &config.diagnostics_dir {
            Some(dir) => Arc::new(DirDiagnostics::new(dir)),
            None => Arc::new(LogDiagnostics),
        };
        let timeout = Duration::from_secs(config.timeout_secs);

        let mut search = Self::new();
        for source in &config.sources {
            let fetcher: Arc<dyn PageFetcher> = Arc::new(match &config.user_agent {
                Some(ua) => HttpFetcher::with_user_agent(timeout, ua)?,
                None => HttpFetcher::new(timeout)?,
            });

            let engine: Arc<dyn Engine> = match source.as_str() {
                "google" => Arc::new(Google::new(fetcher)?),
                "coccoc" => Arc::new(Coccoc::new(fetcher, Arc::clone(&diagnostics))?),
                other => {
                    return Err(SearchError::Config(format!("unknown source '{}'", other)));
                }
            };
            search.add_source(SourceClient::new(engine).with_timeout(timeout));
        }

        Ok(search)
    }

    /// Adds a search engine under its own shortcut.
    pub fn add_engine<E: Engine + 'static>(&mut self, engine: E) {
        self.add_source(SourceClient::new(Arc::new(engine)));
    }

    /// Adds a source. A source with the same id replaces the existing one.
    pub fn add_source(&mut self, source: SourceClient) {
        if let Some(pos) = self
            .sources
            .iter()
            .position(|s| s.source_id() == source.source_id())
        {
            warn!("Replacing source {}", source.source_id());
            self.sources[pos] = source;
        } else {
            self.sources.push(source);
        }
    }

    /// Returns the number of configured sources.
    pub fn engine_count(&self) -> usize {
        self.sources.len()
    }

    /// Returns the ids of the enabled sources, in registration order.
    pub fn source_ids(&self) -> Vec<&str> {
        self.enabled().map(SourceClient::source_id).collect()
    }

    /// Queries every enabled source concurrently and waits for all of them.
    ///
    /// Fails only when the query is invalid or no source is enabled;
    /// per-source failures are reported inside the response.
    pub async fn aggregate_search(&self, query: SearchQuery) -> Result<AggregateResponse> {
        query.validate()?;

        let sources: Vec<&SourceClient> = self.enabled().collect();
        if sources.is_empty() {
            return Err(SearchError::NoEngines);
        }

        let start = Instant::now();
        debug!("Searching {} sources for {:?}", sources.len(), query.keyword);

        let outcomes = join_all(sources.iter().map(|source| source.search(&query))).await;

        let response = self.aggregator.merge(outcomes);
        debug!(
            "Aggregated {} sources in {}ms",
            response.len(),
            start.elapsed().as_millis()
        );
        Ok(response)
    }

    fn enabled(&self) -> impl Iterator<Item = &SourceClient> + '_ {
        self.sources.iter().filter(|s| s.engine().is_enabled())
    }
}

impl Default for Search {
    fn default() -> Self {
        Self::new()
    }
}
