//! Application state.

use std::sync::Arc;

use gazette_upstream::NewsSource;

use crate::cache::{ArticleCache, CacheConfig};
use crate::service::ArticleService;

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    service: ArticleService,
}

impl AppState {
    /// Creates a new AppState around an article service.
    pub fn new(service: ArticleService) -> Self {
        Self { service }
    }

    /// Builds the state from a news source and a cache configuration.
    pub fn from_source(source: Arc<dyn NewsSource>, cache: CacheConfig) -> Self {
        Self::new(ArticleService::new(ArticleCache::new(cache), source))
    }

    /// Returns the article service.
    pub fn service(&self) -> &ArticleService {
        &self.service
    }
}
