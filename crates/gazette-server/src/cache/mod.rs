//! Cache module for Gazette Server.
//!
//! This module provides the read-through result cache using Moka,
//! with TTL-based expiration and metrics.

pub mod article_cache;
pub mod keys;

// Re-exports
pub use article_cache::{ArticleCache, CacheConfig, CachedArticles};
pub use keys::CacheKey;
