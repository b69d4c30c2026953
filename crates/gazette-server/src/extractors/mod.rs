//! Extractors de query string.

mod query;

pub use query::{ArticlesQuery, FieldQuery};
