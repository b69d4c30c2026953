//! News source abstraction.
//!
//! This module defines the trait the server fetches articles through and
//! the query type it sends.

mod query;
mod traits;

pub use query::{DEFAULT_MAX_RESULTS, SearchQuery};
pub use traits::NewsSource;
