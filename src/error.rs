//! Error types for the search library.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur during search operations.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Invalid query.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Request did not complete within the source's timeout.
    #[error("Connection timeout")]
    Timeout,

    /// HTTP request failed or returned a non-success status.
    #[error("HTTP error occurred: {0}")]
    Http(String),

    /// Failed to extract results from a response body.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// No engines configured.
    #[error("No search engines configured")]
    NoEngines,

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl SearchError {
    /// Classifies this error for per-source failure reporting.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SearchError::InvalidQuery(_) | SearchError::Config(_) | SearchError::NoEngines => {
                ErrorKind::Validation
            }
            SearchError::Timeout => ErrorKind::Timeout,
            SearchError::Http(_) => ErrorKind::Http,
            SearchError::Parse(_) => ErrorKind::Parse,
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SearchError::Timeout
        } else {
            SearchError::Http(err.to_string())
        }
    }
}

/// Structural or format drift in an upstream response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The embedded results marker is absent from the page.
    #[error("Embedded results marker not found")]
    MarkerNotFound,

    /// The embedded results literal is not valid JSON.
    #[error("Failed to parse JSON: {0}")]
    InvalidJson(String),

    /// A required field is missing from an otherwise valid payload.
    #[error("Missing field in response: {0}")]
    MissingField(String),

    /// A CSS selector or regex failed to compile.
    #[error("Invalid pattern: {0}")]
    Pattern(String),
}

/// Coarse classification of a search error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The query or configuration was rejected before dispatch.
    Validation,
    /// The source did not answer in time.
    Timeout,
    /// Transport-level or HTTP status failure.
    Http,
    /// The response could not be turned into records.
    Parse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_timeout() {
        let err = SearchError::Timeout;
        assert_eq!(err.to_string(), "Connection timeout");
    }

    #[test]
    fn test_error_display_http() {
        let err = SearchError::Http("HTTP status server error (500)".to_string());
        assert_eq!(
            err.to_string(),
            "HTTP error occurred: HTTP status server error (500)"
        );
    }

    #[test]
    fn test_error_display_invalid_query() {
        let err = SearchError::InvalidQuery("empty keyword".to_string());
        assert_eq!(err.to_string(), "Invalid query: empty keyword");
    }

    #[test]
    fn test_error_display_no_engines() {
        assert_eq!(SearchError::NoEngines.to_string(), "No search engines configured");
    }

    #[test]
    fn test_parse_error_is_transparent() {
        let err: SearchError = ParseError::MissingField("content".to_string()).into();
        assert_eq!(err.to_string(), "Missing field in response: content");
        assert!(matches!(
            err,
            SearchError::Parse(ParseError::MissingField(ref f)) if f == "content"
        ));
    }

    #[test]
    fn test_parse_error_display_marker() {
        assert_eq!(
            ParseError::MarkerNotFound.to_string(),
            "Embedded results marker not found"
        );
    }

    #[test]
    fn test_error_kind_mapping() {
        assert_eq!(SearchError::Timeout.kind(), ErrorKind::Timeout);
        assert_eq!(SearchError::Http("x".into()).kind(), ErrorKind::Http);
        assert_eq!(
            SearchError::from(ParseError::MarkerNotFound).kind(),
            ErrorKind::Parse
        );
        assert_eq!(
            SearchError::InvalidQuery("x".into()).kind(),
            ErrorKind::Validation
        );
        assert_eq!(SearchError::NoEngines.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_error_kind_serialization() {
        let json = serde_json::to_string(&ErrorKind::Timeout).unwrap();
        assert_eq!(json, "\"timeout\"");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchError>();
    }
}
