//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls which sources are queried, the per-source
//! timeout, and how format drift is captured. Use [`Default::default()`] or
//! override individual fields.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{engines, Result, SearchError};

/// Configuration for the aggregated search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Source ids to query, concurrently. See [`engines::AVAILABLE`].
    pub sources: Vec<String>,
    /// Per-source total request timeout in seconds.
    pub timeout_secs: u64,
    /// Custom User-Agent. `None` uses a desktop Chrome string.
    pub user_agent: Option<String>,
    /// Directory for bodies that no longer match the expected format.
    /// `None` logs them instead.
    pub diagnostics_dir: Option<PathBuf>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            sources: engines::AVAILABLE.iter().map(|s| s.to_string()).collect(),
            timeout_secs: 10,
            user_agent: None,
            diagnostics_dir: None,
        }
    }
}

impl SearchConfig {
    /// Validates this configuration.
    ///
    /// Checks:
    /// - `sources` must not be empty
    /// - every source must be a known engine
    /// - `timeout_secs` must be greater than 0
    pub fn validate(&self) -> Result<()> {
        if self.sources.is_empty() {
            return Err(SearchError::Config(
                "at least one source must be enabled".into(),
            ));
        }
        if let Some(unknown) = self
            .sources
            .iter()
            .find(|s| !engines::AVAILABLE.contains(&s.as_str()))
        {
            return Err(SearchError::Config(format!(
                "unknown source '{}' (available: {})",
                unknown,
                engines::AVAILABLE.join(", ")
            )));
        }
        if self.timeout_secs == 0 {
            return Err(SearchError::Config(
                "timeout_secs must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
