//! Upstream fetch metrics.

use std::time::Duration;

use metrics::{counter, histogram};

/// Registra las metricas del proveedor.
pub fn register_upstream_metrics() {
    metrics::describe_counter!(
        "gazette_upstream_requests_total",
        "Provider searches, by source and outcome"
    );
    metrics::describe_histogram!(
        "gazette_upstream_request_duration_seconds",
        "Provider search latency in seconds"
    );
}

/// Recorder de metricas del proveedor.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpstreamMetrics;

impl UpstreamMetrics {
    /// Registra una busqueda terminada (exitosa o no).
    pub fn record_fetch(&self, source: &str, success: bool, duration: Duration) {
        let outcome = if success { "success" } else { "error" };

        counter!(
            "gazette_upstream_requests_total",
            "source" => source.to_string(),
            "outcome" => outcome
        )
        .increment(1);

        histogram!(
            "gazette_upstream_request_duration_seconds",
            "source" => source.to_string()
        )
        .record(duration.as_secs_f64());
    }
}
