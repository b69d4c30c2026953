//! News source trait definition.

use async_trait::async_trait;
use gazette_core::Article;

use super::SearchQuery;
use crate::error::UpstreamError;

/// A source of news articles.
///
/// This trait abstracts over the provider so the server can be exercised
/// against in-process fakes.
///
/// # Implementors
///
/// - `GNewsClient` - Searches a GNews-compatible HTTP API
///
/// # Example
///
/// ```ignore
/// use gazette_upstream::{NewsSource, SearchQuery, UpstreamError};
///
/// struct StaticSource(Vec<Article>);
///
/// #[async_trait]
/// impl NewsSource for StaticSource {
///     async fn search(&self, _query: &SearchQuery) -> Result<Vec<Article>, UpstreamError> {
///         Ok(self.0.clone())
///     }
///
///     fn name(&self) -> &str {
///         "static"
///     }
/// }
/// ```
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Searches the source for articles matching the query.
    ///
    /// Articles are returned in the order the provider ranked them.
    ///
    /// # Errors
    ///
    /// Any failure to obtain a well-formed result set. Callers must not
    /// cache anything for the query when this fails.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Article>, UpstreamError>;

    /// Returns the name of this source.
    ///
    /// This is used for logging and metrics labels.
    fn name(&self) -> &str;
}
