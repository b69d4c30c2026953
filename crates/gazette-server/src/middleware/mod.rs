//! Middleware stack para el servidor HTTP.
//!
//! Middleware de Tower aplicados a todas las requests:
//! - `RequestIdLayer`: genera o propaga `x-request-id`
//! - `LoggingLayer`: un span por request con status, latencia y `x-cache`

use std::future::Future;
use std::pin::Pin;

mod logging;
mod request_id;

pub use logging::{LoggingLayer, LoggingMiddleware};
pub use request_id::{REQUEST_ID_HEADER, RequestIdLayer, RequestIdMiddleware};

/// Future devuelto por los middleware de este modulo.
type BoxFuture<T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send>>;
