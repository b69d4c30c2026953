//! Cache metrics recording.

use gazette_core::SearchIntent;
use metrics::{counter, gauge, histogram};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Registra las metricas de cache.
/// Llamar una vez al inicio para registrar las metricas.
pub fn register_cache_metrics() {
    metrics::describe_counter!(
        "gazette_cache_hits_total",
        "Total number of cache hits, by intent"
    );
    metrics::describe_counter!(
        "gazette_cache_misses_total",
        "Total number of cache misses, by intent"
    );
    metrics::describe_counter!(
        "gazette_cache_evictions_total",
        "Total number of cache removals, by cause"
    );
    metrics::describe_gauge!("gazette_cache_entries", "Approximate number of cached result sets");
    metrics::describe_histogram!(
        "gazette_cache_operation_seconds",
        "Time spent on cache get/set"
    );
}

/// Recorder de metricas de cache.
///
/// Exporta a Prometheus con label `intent` y ademas lleva contadores
/// locales, para que los tests no dependan de un recorder global.
#[derive(Debug, Clone, Default)]
pub struct CacheMetrics {
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
}

impl CacheMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra un cache hit
    pub fn record_hit(&self, intent: SearchIntent) {
        self.hits.fetch_add(1, Ordering::Relaxed);
        counter!("gazette_cache_hits_total", "intent" => intent.as_str()).increment(1);
    }

    /// Registra un cache miss
    pub fn record_miss(&self, intent: SearchIntent) {
        self.misses.fetch_add(1, Ordering::Relaxed);
        counter!("gazette_cache_misses_total", "intent" => intent.as_str()).increment(1);
    }

    /// Registra una remocion (expiracion, reemplazo, capacidad)
    pub fn record_eviction(&self, cause: &'static str) {
        counter!("gazette_cache_evictions_total", "cause" => cause).increment(1);
    }

    pub fn update_entry_count(&self, count: u64) {
        gauge!("gazette_cache_entries").set(count as f64);
    }

    /// Registra la duracion de una operacion ("get" o "set")
    pub fn record_operation_duration(&self, operation: &'static str, duration: Duration) {
        histogram!("gazette_cache_operation_seconds", "operation" => operation)
            .record(duration.as_secs_f64());
    }

    /// Calcula hit rate (para logging/debugging)
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits() as f64;
        let total = hits + self.misses() as f64;
        if total == 0.0 { 0.0 } else { hits / total }
    }

    /// Retorna el numero de hits
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Retorna el numero de misses
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}
