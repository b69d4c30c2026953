//! Fuente de noticias en memoria.

use async_trait::async_trait;
use gazette_core::Article;
use gazette_upstream::{NewsSource, SearchQuery, UpstreamError};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Construye un articulo desde JSON con el formato del proveedor.
pub fn article(json: serde_json::Value) -> Article {
    serde_json::from_value(json).expect("invalid article fixture")
}

/// `NewsSource` que retorna articulos fijos, cuenta llamadas y puede fallar.
pub struct FakeSource {
    articles: Vec<Article>,
    calls: AtomicUsize,
    failing: AtomicBool,
    queries: Mutex<Vec<SearchQuery>>,
}

impl FakeSource {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles,
            calls: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn with_titles(titles: &[&str]) -> Self {
        Self::new(titles.iter().map(|t| Article::titled(*t)).collect())
    }

    /// Hace que las siguientes busquedas fallen (o no).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Queries recibidas, en orden.
    pub fn queries(&self) -> Vec<SearchQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl NewsSource for FakeSource {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Article>, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.clone());

        if self.failing.load(Ordering::SeqCst) {
            return Err(UpstreamError::status(500, "upstream exploded"));
        }
        Ok(self.articles.clone())
    }

    fn name(&self) -> &str {
        "fake"
    }
}
