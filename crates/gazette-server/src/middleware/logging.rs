//! Middleware de logging estructurado.

use axum::{
    body::Body,
    http::{Request, Response},
};
use std::{
    task::{Context, Poll},
    time::Instant,
};
use tower::{Layer, Service};
use tracing::{Instrument, Span, field, info, info_span, warn};

use super::BoxFuture;
use super::request_id::REQUEST_ID_HEADER;
use crate::handlers::CACHE_STATUS_HEADER;

/// Layer que abre un span `http_request` por request.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingLayer;

impl<S> Layer<S> for LoggingLayer {
    type Service = LoggingMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        LoggingMiddleware { inner }
    }
}

/// Servicio que loguea el resultado de cada request.
///
/// Debe ir despues de `RequestIdLayer` para que el span tenga el ID.
#[derive(Clone, Debug)]
pub struct LoggingMiddleware<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for LoggingMiddleware<S>
where
    S: Service<Request<Body>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response<Body>;
    type Error = S::Error;
    type Future = BoxFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let started = Instant::now();

        let span = info_span!(
            "http_request",
            request_id = header_str(request.headers(), &REQUEST_ID_HEADER).unwrap_or("unknown"),
            method = %request.method(),
            path = request.uri().path(),
            query = request.uri().query().unwrap_or(""),
            status = field::Empty,
            cache = field::Empty,
        );

        // Clonar y dejar `self.inner` listo para el siguiente poll_ready
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(
            async move {
                let response = inner.call(request).await?;
                log_completion(&response, started);
                Ok(response)
            }
            .instrument(span),
        )
    }
}

fn log_completion(response: &Response<Body>, started: Instant) {
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    let span = Span::current();
    span.record("status", status.as_u16());
    if let Some(cache) = header_str(response.headers(), &CACHE_STATUS_HEADER) {
        span.record("cache", cache);
    }

    if status.is_server_error() {
        warn!(elapsed_ms, "Request failed");
    } else {
        info!(elapsed_ms, "Request completed");
    }
}

fn header_str<'a>(
    headers: &'a axum::http::HeaderMap,
    name: &axum::http::HeaderName,
) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
