//! Gazette Server - cached, ranked news search over HTTP
//!
//! Axum server in front of a news provider. Each endpoint maps to a
//! [`SearchIntent`](gazette_core::SearchIntent); results are fetched once,
//! ranked for the intent and kept in an in-memory TTL cache.

pub mod cache;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod server;
pub mod service;
pub mod settings;
pub mod state;

pub use error::AppError;
pub use handlers::HealthResponse;
pub use server::{create_router, run_server};
pub use service::{ArticleService, CacheStatus, Lookup};
pub use settings::{Settings, SettingsError};
pub use state::AppState;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
