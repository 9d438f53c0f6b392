//! Cốc Cốc search engine implementation.
//!
//! The results page embeds its data as a JSON literal assigned to
//! `window.composerResponse` inside a `<script>` block. Unlike the HTML
//! scrapers, any item that is missing a required field fails the whole
//! source: it signals a format change and the body is handed to the
//! diagnostics sink for inspection.

use std::sync::Arc;

use async_trait::async_trait;
use regex::Regex;
use serde_json::Value;

use crate::diagnostics::{Capture, Diagnostics};
use crate::error::ParseError;
use crate::extract::Extractor;
use crate::fetcher::PageFetcher;
use crate::{Engine, EngineConfig, ResultRecord, Result, SearchQuery};

/// Default Cốc Cốc origin.
pub const COCCOC_BASE_URL: &str = "https://coccoc.com";

const COMPOSER_PATTERN: &str = r"(?is)<script.*?window\.composerResponse\s*=\s*(.*?);</script>";

/// Cốc Cốc search engine.
pub struct Coccoc {
    config: EngineConfig,
    fetcher: Arc<dyn PageFetcher>,
    extractor: CoccocExtractor,
    base_url: String,
}

impl Coccoc {
    /// Creates a new Cốc Cốc engine reporting format drift to `diagnostics`.
    pub fn new(fetcher: Arc<dyn PageFetcher>, diagnostics: Arc<dyn Diagnostics>) -> Result<Self> {
        let config = EngineConfig {
            name: "Coc Coc".to_string(),
            shortcut: "coccoc".to_string(),
            ..Default::default()
        };
        Ok(Self {
            extractor: CoccocExtractor::new(&config.shortcut, diagnostics)?,
            config,
            fetcher,
            base_url: COCCOC_BASE_URL.to_string(),
        })
    }

    /// Creates with custom configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.extractor.source_id = config.shortcut.clone();
        self.config = config;
        self
    }

    /// Points the engine at a different origin (mirrors, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn search_url(&self, query: &SearchQuery) -> String {
        format!("{}/search?query={}", self.base_url, query.encoded())
    }
}

#[async_trait]
impl Engine for Coccoc {
    fn config(&self) -> &EngineConfig {
        &self.config
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<ResultRecord>> {
        let html = self.fetcher.fetch(&self.search_url(query)).await?;
        Ok(self.extractor.extract(&html)?)
    }
}

/// Extracts results from the `window.composerResponse` JSON blob.
pub struct CoccocExtractor {
    pattern: Regex,
    source_id: String,
    diagnostics: Arc<dyn Diagnostics>,
}

impl CoccocExtractor {
    pub fn new(
        source_id: impl Into<String>,
        diagnostics: Arc<dyn Diagnostics>,
    ) -> std::result::Result<Self, ParseError> {
        Ok(Self {
            pattern: Regex::new(COMPOSER_PATTERN).map_err(|e| ParseError::Pattern(e.to_string()))?,
            source_id: source_id.into(),
            diagnostics,
        })
    }
}

impl Extractor for CoccocExtractor {
    fn extract(&self, body: &str) -> std::result::Result<Vec<ResultRecord>, ParseError> {
        let literal = self
            .pattern
            .captures(body)
            .and_then(|caps| caps.get(1))
            .ok_or(ParseError::MarkerNotFound)?
            .as_str();

        let payload: Value =
            serde_json::from_str(literal).map_err(|e| ParseError::InvalidJson(e.to_string()))?;

        collect_records(&payload).inspect_err(|err| {
            let reason = err.to_string();
            self.diagnostics.capture(&Capture {
                source_id: &self.source_id,
                reason: &reason,
                body,
            });
        })
    }
}

fn collect_records(payload: &Value) -> std::result::Result<Vec<ResultRecord>, ParseError> {
    let items = payload
        .get("search")
        .and_then(|search| search.get("search_results"))
        .and_then(Value::as_array)
        .ok_or_else(|| ParseError::MissingField("search.search_results".to_string()))?;

    let mut records = Vec::new();
    for item in items {
        // Absent `type` is malformed; a non-string one is just another kind
        let kind = item
            .get("type")
            .ok_or_else(|| ParseError::MissingField("type".to_string()))?;
        if kind.as_str() != Some("search") {
            continue;
        }
        records.push(ResultRecord::new(
            text_field(item, "title")?,
            text_field(item, "content")?,
        ));
    }
    Ok(records)
}

fn text_field<'a>(item: &'a Value, name: &str) -> std::result::Result<&'a str, ParseError> {
    item.get(name)
        .and_then(Value::as_str)
        .ok_or_else(|| ParseError::MissingField(name.to_string()))
}
