//! Gazette server binary.

use std::sync::Arc;

use anyhow::Context;
use gazette_server::{AppState, ArticleService, Settings, cache::ArticleCache, run_server};
use gazette_upstream::GNewsClient;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::load().context("failed to load settings")?;
    let addr = settings.socket_addr()?;

    tracing::info!("Starting Gazette server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Provider: {}", settings.upstream.base_url);
    tracing::info!("Cache TTL: {}s", settings.cache.ttl_seconds);

    let prometheus_handle =
        gazette_server::metrics::init_metrics().context("failed to install metrics recorder")?;

    let client = GNewsClient::new(settings.upstream_config()?)
        .context("failed to build provider client")?;

    let service = ArticleService::new(ArticleCache::new(settings.cache_config()), Arc::new(client))
        .with_default_max(settings.upstream.default_max.clone());

    run_server(addr, AppState::new(service), prometheus_handle).await?;

    Ok(())
}
