//! # Gazette Upstream
//!
//! Client for the news provider behind Gazette.
//!
//! This crate turns a [`SearchQuery`] into a provider search request and
//! returns the provider's articles unchanged, in provider order. Ranking and
//! caching happen in the server.
//!
//! ## Example
//!
//! ```ignore
//! use gazette_upstream::{GNewsClient, NewsSource, SearchQuery, UpstreamConfig};
//!
//! let config = UpstreamConfig::builder()
//!     .base_url("https://gnews.io/api/v4")
//!     .api_key(std::env::var("GNEWS_API_KEY")?)
//!     .build()?;
//!
//! let client = GNewsClient::new(config)?;
//! let articles = client.search(&SearchQuery::new("rust")).await?;
//! ```

pub mod config;
pub mod error;
pub mod gnews;
pub mod source;

// Re-exports
pub use config::{UpstreamConfig, UpstreamConfigBuilder};
pub use error::UpstreamError;
pub use gnews::GNewsClient;
pub use source::{NewsSource, SearchQuery};

// Re-export gazette_core for consumers
pub use gazette_core;
