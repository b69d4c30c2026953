//! News provider client configuration.

use std::fmt;
use std::time::Duration;

use crate::source::DEFAULT_MAX_RESULTS;

const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the provider client.
#[derive(Clone)]
pub struct UpstreamConfig {
    /// Base URL of the provider API, without the `/search` suffix.
    base_url: String,

    /// API token sent with every request.
    api_key: String,

    /// Language filter sent with every request.
    language: String,

    /// Result count used when a query does not carry one.
    default_max: String,

    /// Per-request timeout.
    timeout: Duration,
}

impl UpstreamConfig {
    /// Creates a new builder for UpstreamConfig.
    pub fn builder() -> UpstreamConfigBuilder {
        UpstreamConfigBuilder::default()
    }

    /// Returns the base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the API token.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the language filter.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns the default result count.
    pub fn default_max(&self) -> &str {
        &self.default_max
    }

    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the full search endpoint URL.
    pub fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }
}

impl fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("language", &self.language)
            .field("default_max", &self.default_max)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Builder for UpstreamConfig.
#[derive(Debug, Default)]
pub struct UpstreamConfigBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    language: Option<String>,
    default_max: Option<String>,
    timeout: Option<Duration>,
}

impl UpstreamConfigBuilder {
    /// Sets the provider base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the API token.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the language filter.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the default result count.
    pub fn default_max(mut self, max: impl Into<String>) -> Self {
        self.default_max = Some(max.into());
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL or API key is missing or blank.
    pub fn build(self) -> Result<UpstreamConfig, &'static str> {
        let base_url = self
            .base_url
            .filter(|url| !url.trim().is_empty())
            .ok_or("base_url is required")?;
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or("api_key is required")?;

        Ok(UpstreamConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            language: self.language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            default_max: self
                .default_max
                .unwrap_or_else(|| DEFAULT_MAX_RESULTS.to_string()),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        })
    }
}
