//! HTTP handlers.

pub mod articles;
pub mod health;
pub mod metrics;
pub mod response;

pub use health::HealthResponse;
pub use response::{ArticlesResponse, CACHE_STATUS_HEADER};
