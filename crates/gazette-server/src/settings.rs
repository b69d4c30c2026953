//! Server settings.
//!
//! Sources, lowest precedence first:
//!
//! 1. Built-in defaults.
//! 2. An optional TOML file, `gazette.toml` or the path in `GAZETTE_CONFIG`.
//! 3. Environment variables `GAZETTE__<SECTION>__<KEY>`, e.g.
//!    `GAZETTE__CACHE__TTL_SECONDS=60`.
//! 4. Deployment variables `GNEWS_API_KEY`, `GNEWS_BASE_URL` and `PORT`.

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use config::{Config, Environment, File};
use gazette_upstream::UpstreamConfig;
use serde::Deserialize;

use crate::cache::CacheConfig;

/// Variable con la ruta del archivo de configuracion.
pub const CONFIG_PATH_VAR: &str = "GAZETTE_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "gazette.toml";

/// Error al cargar la configuracion.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Configuracion completa del servidor.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub upstream: UpstreamSettings,
    pub cache: CacheSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Proveedor de noticias.
#[derive(Clone, Deserialize)]
pub struct UpstreamSettings {
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    pub language: String,
    /// Resultados por busqueda general cuando el cliente no envia `max`.
    pub default_max: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    pub ttl_seconds: u64,
    /// Sin limite si no se configura.
    pub max_capacity: Option<u64>,
}

impl Settings {
    /// Carga la configuracion desde el entorno del proceso.
    pub fn load() -> Result<Self, SettingsError> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        let path = vars.get(CONFIG_PATH_VAR).cloned();
        Self::load_with(path, vars)
    }

    /// Carga la configuracion con un archivo y variables explicitos.
    ///
    /// `vars` reemplaza al entorno del proceso, lo que permite testear sin
    /// tocar variables globales.
    pub fn load_with(
        path: Option<String>,
        vars: HashMap<String, String>,
    ) -> Result<Self, SettingsError> {
        let path = path.unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

        let settings: Settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("upstream.base_url", "https://gnews.io/api/v4")?
            .set_default("upstream.language", "en")?
            .set_default(
                "upstream.default_max",
                gazette_upstream::source::DEFAULT_MAX_RESULTS,
            )?
            .set_default("upstream.timeout_seconds", 10)?
            .set_default("cache.ttl_seconds", 300)?
            .add_source(File::with_name(&path).required(false))
            .add_source(
                Environment::with_prefix("GAZETTE")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars.clone())),
            )
            .set_override_option("upstream.api_key", vars.get("GNEWS_API_KEY").cloned())?
            .set_override_option("upstream.base_url", vars.get("GNEWS_BASE_URL").cloned())?
            .set_override_option("server.port", vars.get("PORT").cloned())?
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.upstream.api_key.trim().is_empty() {
            return Err(SettingsError::Invalid(
                "upstream API key is required (set GNEWS_API_KEY)".to_string(),
            ));
        }
        if self.cache.ttl_seconds == 0 {
            return Err(SettingsError::Invalid(
                "cache.ttl_seconds must be greater than zero".to_string(),
            ));
        }
        if self.upstream.timeout_seconds == 0 {
            return Err(SettingsError::Invalid(
                "upstream.timeout_seconds must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Direccion donde escucha el servidor.
    pub fn socket_addr(&self) -> Result<SocketAddr, SettingsError> {
        let ip: IpAddr = self.server.host.parse().map_err(|_| {
            SettingsError::Invalid(format!("server.host is not an IP address: {}", self.server.host))
        })?;
        Ok(SocketAddr::new(ip, self.server.port))
    }

    /// Configuracion del cliente del proveedor.
    pub fn upstream_config(&self) -> Result<UpstreamConfig, SettingsError> {
        UpstreamConfig::builder()
            .base_url(&self.upstream.base_url)
            .api_key(&self.upstream.api_key)
            .language(&self.upstream.language)
            .default_max(&self.upstream.default_max)
            .timeout(Duration::from_secs(self.upstream.timeout_seconds))
            .build()
            .map_err(|e| SettingsError::Invalid(e.to_string()))
    }

    /// Configuracion del cache.
    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig {
            ttl: Duration::from_secs(self.cache.ttl_seconds),
            max_capacity: self.cache.max_capacity,
        }
    }
}

impl std::fmt::Debug for UpstreamSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("language", &self.language)
            .field("default_max", &self.default_max)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn load(pairs: &[(&str, &str)]) -> Result<Settings, SettingsError> {
        Settings::load_with(Some("does-not-exist.toml".to_string()), vars(pairs))
    }

    #[test]
    fn test_defaults() {
        let settings = load(&[("GNEWS_API_KEY", "secret")]).unwrap();

        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.upstream.base_url, "https://gnews.io/api/v4");
        assert_eq!(settings.upstream.language, "en");
        assert_eq!(settings.upstream.default_max, "10");
        assert_eq!(settings.upstream.timeout_seconds, 10);
        assert_eq!(settings.cache.ttl_seconds, 300);
        assert_eq!(settings.cache.max_capacity, None);
    }

    #[test]
    fn test_missing_api_key_is_rejected() {
        let err = load(&[]).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_blank_api_key_is_rejected() {
        assert!(load(&[("GNEWS_API_KEY", "   ")]).is_err());
    }

    #[test]
    fn test_prefixed_environment() {
        let settings = load(&[
            ("GAZETTE__UPSTREAM__API_KEY", "from-env"),
            ("GAZETTE__CACHE__TTL_SECONDS", "60"),
            ("GAZETTE__CACHE__MAX_CAPACITY", "500"),
            ("GAZETTE__SERVER__PORT", "9000"),
        ])
        .unwrap();

        assert_eq!(settings.upstream.api_key, "from-env");
        assert_eq!(settings.cache.ttl_seconds, 60);
        assert_eq!(settings.cache.max_capacity, Some(500));
        assert_eq!(settings.server.port, 9000);
    }

    #[test]
    fn test_deployment_variables_take_precedence() {
        let settings = load(&[
            ("GAZETTE__UPSTREAM__API_KEY", "from-prefixed"),
            ("GNEWS_API_KEY", "from-deployment"),
            ("GNEWS_BASE_URL", "http://localhost:9999"),
            ("PORT", "3000"),
        ])
        .unwrap();

        assert_eq!(settings.upstream.api_key, "from-deployment");
        assert_eq!(settings.upstream.base_url, "http://localhost:9999");
        assert_eq!(settings.server.port, 3000);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = load(&[("GNEWS_API_KEY", "k"), ("PORT", "not-a-port")]).unwrap_err();
        assert!(matches!(err, SettingsError::Load(_)));
    }

    #[test]
    fn test_zero_ttl_is_rejected() {
        let result = load(&[("GNEWS_API_KEY", "k"), ("GAZETTE__CACHE__TTL_SECONDS", "0")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let err = load(&[
            ("GNEWS_API_KEY", "k"),
            ("GAZETTE__UPSTREAM__TIMEOUT_SECONDS", "0"),
        ])
        .unwrap_err();

        assert!(matches!(err, SettingsError::Invalid(_)));
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn test_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[upstream]\napi_key = \"from-file\"\nlanguage = \"es\"\n\n[cache]\nttl_seconds = 30"
        )
        .unwrap();

        let path = file.path().to_string_lossy().into_owned();
        let settings = Settings::load_with(Some(path), vars(&[])).unwrap();

        assert_eq!(settings.upstream.api_key, "from-file");
        assert_eq!(settings.upstream.language, "es");
        assert_eq!(settings.cache.ttl_seconds, 30);
        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    fn test_environment_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[cache]\nttl_seconds = 30").unwrap();

        let path = file.path().to_string_lossy().into_owned();
        let settings = Settings::load_with(
            Some(path),
            vars(&[("GNEWS_API_KEY", "k"), ("GAZETTE__CACHE__TTL_SECONDS", "90")]),
        )
        .unwrap();

        assert_eq!(settings.cache.ttl_seconds, 90);
    }

    #[test]
    fn test_derived_configs() {
        let settings = load(&[("GNEWS_API_KEY", "k"), ("GAZETTE__CACHE__TTL_SECONDS", "42")]).unwrap();

        assert_eq!(settings.socket_addr().unwrap().to_string(), "0.0.0.0:8080");
        assert_eq!(settings.cache_config().ttl, Duration::from_secs(42));

        let upstream = settings.upstream_config().unwrap();
        assert_eq!(upstream.api_key(), "k");
        assert_eq!(upstream.default_max(), "10");
        assert_eq!(upstream.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let settings = load(&[("GNEWS_API_KEY", "super-secret")]).unwrap();
        assert!(!format!("{:?}", settings).contains("super-secret"));
    }
}
