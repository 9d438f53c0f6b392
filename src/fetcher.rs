//! Page fetcher abstraction for retrieving raw response bodies.

use async_trait::async_trait;

use crate::Result;

/// Trait for fetching the raw body of a URL.
///
/// All configuration (headers, timeouts) is set at construction time;
/// `fetch` is a simple URL-in, body-out interface. Implementations must not
/// retry: a failed fetch is surfaced to the caller immediately.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches the body of the given URL.
    ///
    /// Returns [`SearchError::Timeout`](crate::SearchError::Timeout) when the
    /// request exceeds its time budget and
    /// [`SearchError::Http`](crate::SearchError::Http) for non-2xx statuses
    /// and network failures.
    async fn fetch(&self, url: &str) -> Result<String>;
}
