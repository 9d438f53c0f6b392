//! Google search engine implementation.
//!
//! Results are scraped from the server-rendered HTML page. Google's markup
//! drifts often, so extraction is best effort: containers that do not have
//! the expected shape are skipped rather than failing the source.

use std::sync::Arc;

use async_trait::async_trait;
use scraper::Selector;
use tracing::trace;

use crate::error::ParseError;
use crate::extract::{selector, Extractor, Markup};
use crate::fetcher::PageFetcher;
use crate::{Engine, EngineConfig, ResultRecord, Result, SearchQuery};

/// Default Google origin.
pub const GOOGLE_BASE_URL: &str = "https://www.google.com";

/// Google search engine.
pub struct Google {
    config: EngineConfig,
    fetcher: Arc<dyn PageFetcher>,
    extractor: GoogleExtractor,
    base_url: String,
}

impl Google {
    /// Creates a new Google engine with the given page fetcher.
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Result<Self> {
        Ok(Self {
            config: EngineConfig {
                name: "Google".to_string(),
                shortcut: "google".to_string(),
                ..Default::default()
            },
            fetcher,
            extractor: GoogleExtractor::new()?,
            base_url: GOOGLE_BASE_URL.to_string(),
        })
    }

    /// Creates with custom configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Points the engine at a different origin (mirrors, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn search_url(&self, query: &SearchQuery) -> String {
        format!("{}/search?q={}", self.base_url, query.encoded())
    }
}

#[async_trait]
impl Engine for Google {
    fn config(&self) -> &EngineConfig {
        &self.config
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<ResultRecord>> {
        let html = self.fetcher.fetch(&self.search_url(query)).await?;
        Ok(self.extractor.extract(&html)?)
    }
}

/// Extracts organic results from a Google results page.
///
/// Each organic result sits in a `div.g`. Its second descendant `div`
/// holds the text; the first `span` in it is the title and the last one
/// the snippet.
pub struct GoogleExtractor {
    container: Selector,
    block: Selector,
    inline: Selector,
}

impl GoogleExtractor {
    pub fn new() -> std::result::Result<Self, ParseError> {
        Ok(Self {
            container: selector("div.g")?,
            block: selector("div")?,
            inline: selector("span")?,
        })
    }
}

impl Extractor for GoogleExtractor {
    fn extract(&self, body: &str) -> std::result::Result<Vec<ResultRecord>, ParseError> {
        let markup = Markup::parse(body);
        let mut records = Vec::new();

        for (position, container) in markup.select(&self.container).enumerate() {
            let Some(block) = container.nth(&self.block, 1) else {
                trace!("Skipping result {}: no text block", position);
                continue;
            };
            let (Some(title), Some(description)) =
                (block.first(&self.inline), block.last(&self.inline))
            else {
                trace!("Skipping result {}: no inline text", position);
                continue;
            };
            records.push(ResultRecord::new(title.text(), description.text()));
        }

        Ok(records)
    }
}
