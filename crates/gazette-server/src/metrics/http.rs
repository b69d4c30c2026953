//! HTTP metrics middleware.

use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::MatchedPath,
    http::{Method, Request, StatusCode},
    middleware::Next,
    response::Response,
};
use metrics::{counter, histogram};

/// Label de ruta para requests que no matchean ninguna ruta.
const UNMATCHED_ROUTE: &str = "unmatched";

/// Registra las metricas HTTP.
pub fn register_http_metrics() {
    metrics::describe_counter!(
        "gazette_http_requests_total",
        "HTTP requests, by method, route and status"
    );
    metrics::describe_histogram!(
        "gazette_http_request_duration_seconds",
        "HTTP request latency in seconds, by method and route"
    );
}

/// Middleware que mide cada request.
///
/// El label `route` es la ruta registrada (no la URI), asi las query
/// strings y rutas desconocidas no crean series nuevas.
pub async fn http_metrics_middleware(
    matched_path: Option<MatchedPath>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let route = matched_path
        .as_ref()
        .map(MatchedPath::as_str)
        .unwrap_or(UNMATCHED_ROUTE)
        .to_string();

    let response = next.run(request).await;

    record_request(&method, route, response.status(), started.elapsed());
    response
}

fn record_request(method: &Method, route: String, status: StatusCode, elapsed: Duration) {
    counter!(
        "gazette_http_requests_total",
        "method" => method.as_str().to_string(),
        "route" => route.clone(),
        "status" => status.as_u16().to_string()
    )
    .increment(1);

    histogram!(
        "gazette_http_request_duration_seconds",
        "method" => method.as_str().to_string(),
        "route" => route
    )
    .record(elapsed.as_secs_f64());
}
