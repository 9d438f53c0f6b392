//! Search engine trait and configuration.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{ResultRecord, Result, SearchQuery};

/// Configuration for a search engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Display name of the engine.
    pub name: String,
    /// Stable identifier used as the response key (e.g., "google").
    pub shortcut: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Whether the engine is enabled.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_timeout() -> u64 {
    10
}

fn default_enabled() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            shortcut: String::new(),
            timeout: default_timeout(),
            enabled: true,
        }
    }
}

/// Trait for implementing search engines.
///
/// An engine fetches one backend's results page for a query and extracts
/// records from it. Errors are returned as-is; isolating them per source is
/// the job of [`SourceClient`](crate::SourceClient).
#[async_trait]
pub trait Engine: Send + Sync {
    /// Returns the engine configuration.
    fn config(&self) -> &EngineConfig;

    /// Performs a search and returns records in engine rank order.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<ResultRecord>>;

    /// Returns the engine name.
    fn name(&self) -> &str {
        &self.config().name
    }

    /// Returns the engine shortcut, used as the source id.
    fn shortcut(&self) -> &str {
        &self.config().shortcut
    }

    /// Returns whether the engine is enabled.
    fn is_enabled(&self) -> bool {
        self.config().enabled
    }
}
