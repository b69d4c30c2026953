//! Result cache using Moka.

use crate::cache::keys::CacheKey;
use crate::metrics::CacheMetrics;
use gazette_core::Article;
use moka::future::Cache;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Resultado cacheado: lista ordenada e inmutable de articulos.
pub type CachedArticles = Arc<Vec<Article>>;

/// Configuracion del cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL de cada entry (default: 300s = 5 minutos)
    pub ttl: Duration,
    /// Maximo numero de entries (default: sin limite)
    pub max_capacity: Option<u64>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: None,
        }
    }
}

/// Cache de resultados de busqueda usando Moka.
/// Thread-safe y async-friendly.
///
/// Una entry es visible mientras `now - insertada < ttl`; despues se
/// comporta como ausente. No hay invalidacion explicita.
///
/// # Examples
///
/// ```no_run
/// use gazette_server::cache::{ArticleCache, CacheConfig, CacheKey};
///
/// # #[tokio::main]
/// # async fn main() {
/// let cache = ArticleCache::new(CacheConfig::default());
/// let key = CacheKey::title("rust");
///
/// if let Some(articles) = cache.get(&key).await {
///     println!("Cache hit: {} articles", articles.len());
/// }
/// # }
/// ```
#[derive(Clone)]
pub struct ArticleCache {
    inner: Cache<CacheKey, CachedArticles>,
    metrics: CacheMetrics,
    ttl: Duration,
}

impl ArticleCache {
    /// Crea un nuevo cache con la configuracion dada.
    pub fn new(config: CacheConfig) -> Self {
        let metrics = CacheMetrics::new();

        let mut builder = Cache::builder().time_to_live(config.ttl);

        if let Some(capacity) = config.max_capacity {
            builder = builder.max_capacity(capacity);
        }

        // Configurar listener para evictions
        let eviction_metrics = metrics.clone();
        builder = builder.eviction_listener(move |_key, _value, cause| {
            let reason = match cause {
                moka::notification::RemovalCause::Expired => "ttl",
                moka::notification::RemovalCause::Size => "capacity",
                moka::notification::RemovalCause::Explicit => "manual",
                moka::notification::RemovalCause::Replaced => "replaced",
            };
            eviction_metrics.record_eviction(reason);
        });

        Self {
            inner: builder.build(),
            metrics,
            ttl: config.ttl,
        }
    }

    /// Obtiene un valor del cache si existe y no expiro.
    pub async fn get(&self, key: &CacheKey) -> Option<CachedArticles> {
        let start = Instant::now();
        let result = self.inner.get(key).await;

        if result.is_some() {
            self.metrics.record_hit(key.intent());
        } else {
            self.metrics.record_miss(key.intent());
        }

        self.metrics
            .record_operation_duration("get", start.elapsed());

        result
    }

    /// Inserta o reemplaza el valor de `key`, reiniciando su TTL.
    /// Retorna el valor compartido tal como quedo en cache.
    pub async fn set(&self, key: CacheKey, articles: Vec<Article>) -> CachedArticles {
        let start = Instant::now();
        let value = Arc::new(articles);

        self.inner.insert(key, Arc::clone(&value)).await;

        self.metrics
            .record_operation_duration("set", start.elapsed());
        self.update_entry_gauge();

        value
    }

    /// Retorna el numero aproximado de entries en cache.
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }

    /// Retorna el TTL configurado.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Retorna las metricas para acceso externo.
    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }

    /// Actualiza el gauge de entry count.
    fn update_entry_gauge(&self) {
        self.metrics.update_entry_count(self.inner.entry_count());
    }

    /// Sincroniza el cache (para tests principalmente).
    /// Procesa tareas pendientes para que `entry_count` sea exacto.
    pub async fn sync(&self) {
        self.inner.run_pending_tasks().await;
    }
}

impl std::fmt::Debug for ArticleCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArticleCache")
            .field("ttl", &self.ttl)
            .field("entries", &self.inner.entry_count())
            .finish()
    }
}
