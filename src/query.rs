//! Search query representation.

use serde::{Deserialize, Serialize};

use crate::{Result, SearchError};

/// A search query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// The search terms, as typed by the user.
    pub keyword: String,
}

impl SearchQuery {
    /// Creates a new search query with the given terms.
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
        }
    }

    /// Rejects empty or whitespace-only keywords.
    pub fn validate(&self) -> Result<()> {
        if self.keyword.trim().is_empty() {
            return Err(SearchError::InvalidQuery("Keyword is required".into()));
        }
        Ok(())
    }

    /// Returns the keyword percent-encoded for use as a query parameter.
    pub fn encoded(&self) -> String {
        urlencoding::encode(&self.keyword).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_search_query_new() {
        let query = SearchQuery::new("test query");
        assert_eq!(query.keyword, "test query");
    }

    #[test]
    fn test_validate_accepts_keyword() {
        assert_ok!(SearchQuery::new("rust").validate());
        assert_ok!(SearchQuery::new("  padded  ").validate());
    }

    #[test]
    fn test_validate_rejects_empty() {
        let err = assert_err!(SearchQuery::new("").validate());
        assert_eq!(err.to_string(), "Invalid query: Keyword is required");
    }

    #[test]
    fn test_validate_rejects_whitespace() {
        let result = SearchQuery::new("\t\n  ").validate();
        assert!(matches!(result, Err(SearchError::InvalidQuery(_))));
    }

    #[test]
    fn test_encoded_escapes_reserved_characters() {
        let query = SearchQuery::new("rust & go?");
        assert_eq!(query.encoded(), "rust%20%26%20go%3F");
    }

    #[test]
    fn test_encoded_unicode() {
        let query = SearchQuery::new("c\u{1ed1}c");
        assert_eq!(query.encoded(), "c%E1%BB%91c");
    }

    #[test]
    fn test_search_query_serialization() {
        let query = SearchQuery::new("test");
        let json = serde_json::to_string(&query).unwrap();
        assert_eq!(json, r#"{"keyword":"test"}"#);
    }
}
