use axum::{
    Json,
    http::{HeaderName, HeaderValue},
    response::{IntoResponse, Response},
};

use crate::cache::CachedArticles;
use crate::service::{CacheStatus, Lookup};

/// Header que indica si la respuesta vino del cache.
pub static CACHE_STATUS_HEADER: HeaderName = HeaderName::from_static("x-cache");

/// Respuesta de los endpoints de articulos: un array JSON de articulos.
///
/// El body es exactamente lo que esta en cache; el origen va en `x-cache`.
#[derive(Debug, Clone)]
pub struct ArticlesResponse {
    pub articles: CachedArticles,
    pub cache: CacheStatus,
}

impl From<Lookup> for ArticlesResponse {
    fn from(lookup: Lookup) -> Self {
        Self {
            articles: lookup.articles,
            cache: lookup.cache,
        }
    }
}

impl IntoResponse for ArticlesResponse {
    fn into_response(self) -> Response {
        let mut response = Json(self.articles.as_slice()).into_response();
        response.headers_mut().insert(
            CACHE_STATUS_HEADER.clone(),
            HeaderValue::from_static(self.cache.as_str()),
        );
        response
    }
}
