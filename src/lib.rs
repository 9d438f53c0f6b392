//! # fanout-search
//!
//! Fans one keyword out to several search engines concurrently and returns
//! their results side by side, keyed by source.
//!
//! - Each source is fetched with its own HTTP client and time budget
//! - HTML pages and embedded JSON blobs are normalized to `{title, description}`
//! - A failing source reports an error under its own key; the others are unaffected
//!
//! ## Example
//!
//! ```rust,no_run
//! use fanout_search::{Search, SearchConfig, SearchQuery};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let search = Search::from_config(&SearchConfig::default())?;
//!
//!     let response = search.aggregate_search(SearchQuery::new("rust programming")).await?;
//!
//!     for (source, outcome) in response.iter() {
//!         match outcome.records() {
//!             Some(records) => println!("{}: {} results", source, records.len()),
//!             None => println!("{}: failed", source),
//!         }
//!     }
//!     Ok(())
//! }
//! ```

mod aggregator;
mod config;
mod engine;
mod error;
mod fetcher_http;
mod query;
mod result;
mod search;
mod source;

pub mod diagnostics;
pub mod engines;
pub mod extract;
pub mod fetcher;
pub mod server;

pub use aggregator::Aggregator;
pub use config::SearchConfig;
pub use engine::{Engine, EngineConfig};
pub use error::{ErrorKind, ParseError, Result, SearchError};
pub use fetcher::PageFetcher;
pub use fetcher_http::{HttpFetcher, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use query::SearchQuery;
pub use result::{AggregateResponse, ResultRecord, SourceResult};
pub use search::Search;
pub use source::SourceClient;
