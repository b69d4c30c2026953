//! Gazette Core - Article types and relevance ranking
//!
//! This crate holds the pure half of the cache-and-rank pipeline: the
//! [`Article`] model returned by the news provider, the [`SearchIntent`]
//! that selects a ranking strategy, and the ranker itself.

pub mod article;
pub mod intent;
pub mod rank;

pub use article::Article;
pub use intent::SearchIntent;
pub use rank::{dedupe_merge, rank, rank_for_intent, score, tokenize};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
