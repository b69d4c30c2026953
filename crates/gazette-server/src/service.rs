//! Query dispatcher: cache lookup, provider fetch, ranking.

use std::sync::Arc;
use std::time::Instant;

use gazette_core::{Article, SearchIntent, rank_for_intent};
use gazette_upstream::{NewsSource, SearchQuery, UpstreamError};
use tracing::{debug, warn};

use crate::cache::{ArticleCache, CacheKey, CachedArticles};
use crate::metrics::UpstreamMetrics;

/// Origen de una respuesta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
}

impl CacheStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hit => "HIT",
            Self::Miss => "MISS",
        }
    }
}

/// Resultado de una busqueda junto con su origen.
#[derive(Debug, Clone)]
pub struct Lookup {
    pub articles: CachedArticles,
    pub cache: CacheStatus,
}

/// Servicio de busqueda de articulos.
///
/// Cada request sigue el mismo camino: key por intent, lookup en cache, y
/// en un miss fetch al proveedor, ranking y escritura en cache. Los errores
/// del proveedor no se cachean.
///
/// Dos requests concurrentes con la misma key pueden hacer fetch ambas.
#[derive(Clone)]
pub struct ArticleService {
    cache: ArticleCache,
    source: Arc<dyn NewsSource>,
    upstream_metrics: UpstreamMetrics,
    default_max: String,
}

impl ArticleService {
    /// Crea el servicio con un cache y una fuente ya construidos.
    pub fn new(cache: ArticleCache, source: Arc<dyn NewsSource>) -> Self {
        Self {
            cache,
            source,
            upstream_metrics: UpstreamMetrics,
            default_max: gazette_upstream::source::DEFAULT_MAX_RESULTS.to_string(),
        }
    }

    /// Cambia el numero de resultados usado cuando el cliente no envia `max`.
    pub fn with_default_max(mut self, default_max: impl Into<String>) -> Self {
        self.default_max = default_max.into();
        self
    }

    /// Busqueda general, sin ranking.
    pub async fn general(&self, query: &str, max: Option<&str>) -> Result<Lookup, UpstreamError> {
        self.search(SearchIntent::General, query, max).await
    }

    /// Busqueda rankeada por titulo.
    pub async fn by_title(&self, query: &str) -> Result<Lookup, UpstreamError> {
        self.search(SearchIntent::Title, query, None).await
    }

    /// Busqueda rankeada por nombre de la fuente.
    pub async fn by_author(&self, query: &str) -> Result<Lookup, UpstreamError> {
        self.search(SearchIntent::Author, query, None).await
    }

    /// Busqueda rankeada por titulo, descripcion y contenido, sin duplicados.
    pub async fn by_keyword(&self, query: &str) -> Result<Lookup, UpstreamError> {
        self.search(SearchIntent::Keyword, query, None).await
    }

    /// Ejecuta una busqueda para cualquier intent.
    ///
    /// `max` solo se considera para [`SearchIntent::General`]; los intents
    /// rankeados piden al proveedor su numero de resultados por defecto.
    pub async fn search(
        &self,
        intent: SearchIntent,
        query: &str,
        max: Option<&str>,
    ) -> Result<Lookup, UpstreamError> {
        let max = max.unwrap_or(&self.default_max);
        let key = CacheKey::for_intent(intent, query, max);

        if let Some(articles) = self.cache.get(&key).await {
            debug!(key = %key, count = articles.len(), "Cache hit");
            return Ok(Lookup {
                articles,
                cache: CacheStatus::Hit,
            });
        }

        debug!(key = %key, "Cache miss, fetching from provider");

        let mut search = SearchQuery::new(query);
        if let Some(max) = key.max() {
            search = search.with_max(max);
        }

        let fetched = self.fetch(&search).await?;
        let ranked = rank_for_intent(intent, fetched, query);
        let articles = self.cache.set(key, ranked).await;

        Ok(Lookup {
            articles,
            cache: CacheStatus::Miss,
        })
    }

    async fn fetch(&self, query: &SearchQuery) -> Result<Vec<Article>, UpstreamError> {
        let start = Instant::now();
        let result = self.source.search(query).await;

        self.upstream_metrics
            .record_fetch(self.source.name(), result.is_ok(), start.elapsed());

        if let Err(e) = &result {
            warn!(
                source = self.source.name(),
                query = %query,
                transient = e.is_transient(),
                error = %e,
                "Provider search failed"
            );
        }

        result
    }

    /// Retorna el cache para acceso externo.
    pub fn cache(&self) -> &ArticleCache {
        &self.cache
    }

    /// Retorna el `max` usado por defecto.
    pub fn default_max(&self) -> &str {
        &self.default_max
    }
}

impl std::fmt::Debug for ArticleService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArticleService")
            .field("cache", &self.cache)
            .field("source", &self.source.name())
            .field("default_max", &self.default_max)
            .finish()
    }
}
