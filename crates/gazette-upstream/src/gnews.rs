//! GNews-compatible search client.

use std::time::Instant;

use async_trait::async_trait;
use gazette_core::Article;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::UpstreamConfig;
use crate::error::UpstreamError;
use crate::source::{NewsSource, SearchQuery};

/// Body of a provider search response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    #[serde(default)]
    total_articles: Option<u64>,
    articles: Vec<Article>,
}

/// A news source backed by a GNews-compatible HTTP API.
///
/// One client is built at startup and shared by every request; the inner
/// [`reqwest::Client`] pools connections.
pub struct GNewsClient {
    http: reqwest::Client,
    config: UpstreamConfig,
}

impl GNewsClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Config`] if the HTTP client cannot be built.
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("gazette/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| UpstreamError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }
}

#[async_trait]
impl NewsSource for GNewsClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Article>, UpstreamError> {
        let max = query.effective_max(self.config.default_max());
        let timeout_seconds = self.config.timeout().as_secs();
        let start = Instant::now();

        debug!(term = %query.term(), max = %max, "Searching provider");

        let response = self
            .http
            .get(self.config.search_url())
            .query(&[
                ("q", query.term()),
                ("max", max),
                ("lang", self.config.language()),
                ("token", self.config.api_key()),
            ])
            .send()
            .await
            .map_err(|e| UpstreamError::from_transport(e, timeout_seconds))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), term = %query.term(), "Provider rejected search");
            return Err(UpstreamError::status(status.as_u16(), body));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::from_transport(e, timeout_seconds))?;

        let body: SearchResponse = serde_json::from_slice(&bytes).map_err(|e| {
            warn!(error = %e, "Provider returned malformed body");
            UpstreamError::Decode(e.to_string())
        })?;

        debug!(
            returned = body.articles.len(),
            total = body.total_articles,
            duration_ms = start.elapsed().as_millis() as u64,
            "Provider search complete"
        );

        Ok(body.articles)
    }

    fn name(&self) -> &str {
        "gnews"
    }
}

impl std::fmt::Debug for GNewsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GNewsClient")
            .field("config", &self.config)
            .finish()
    }
}
