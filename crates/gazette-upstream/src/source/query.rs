//! Search query types.

use serde::{Deserialize, Serialize};

/// Result count sent to the provider when the client gives none.
pub const DEFAULT_MAX_RESULTS: &str = "10";

/// A query for fetching articles from a news source.
///
/// `max` is kept exactly as the client sent it. It is forwarded to the
/// provider without local validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchQuery {
    /// The free-text search term.
    term: String,

    /// Requested result count. None means use the source default.
    max: Option<String>,
}

impl SearchQuery {
    /// Creates a new search query.
    ///
    /// # Example
    ///
    /// ```
    /// use gazette_upstream::SearchQuery;
    ///
    /// let query = SearchQuery::new("rust");
    /// assert_eq!(query.term(), "rust");
    /// assert_eq!(query.max(), None);
    /// ```
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            max: None,
        }
    }

    /// Returns a new query with the given result count.
    ///
    /// # Example
    ///
    /// ```
    /// use gazette_upstream::SearchQuery;
    ///
    /// let query = SearchQuery::new("rust").with_max("25");
    /// assert_eq!(query.max(), Some("25"));
    /// ```
    pub fn with_max(mut self, max: impl Into<String>) -> Self {
        self.max = Some(max.into());
        self
    }

    /// Returns the search term.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Returns the requested result count, if any.
    pub fn max(&self) -> Option<&str> {
        self.max.as_deref()
    }

    /// Returns the effective result count, using the provided default if none is set.
    pub fn effective_max<'a>(&'a self, default: &'a str) -> &'a str {
        self.max.as_deref().unwrap_or(default)
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.term)?;
        if let Some(max) = &self.max {
            write!(f, " (max {})", max)?;
        }
        Ok(())
    }
}
