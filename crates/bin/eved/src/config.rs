//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `eve.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use eve_adapter_http_hyper::HttpApiConfig;
use eve_domain::fixtures::DEFAULT_PERSON;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Home API the dashboard reads from.
    pub upstream: HttpApiConfig,
    /// Dashboard behaviour.
    pub dashboard: DashboardConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Dashboard configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Occupant whose weight readings are shown.
    pub person: String,
    /// Page auto-reload interval in seconds.
    pub refresh_seconds: u32,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `eve.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("eve.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("EVE_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("EVE_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("EVE_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("EVE_API_URL") {
            self.upstream.base_url = val;
        }
        if let Some(secs) = var("EVE_API_TIMEOUT_SECS").and_then(|val| val.parse().ok()) {
            self.upstream.timeout_secs = Some(secs);
        }
        if let Some(val) = var("EVE_PERSON") {
            self.dashboard.person = val;
        }
        if let Some(val) = var("EVE_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if !self.upstream.base_url.starts_with("http://") {
            return Err(ConfigError::Validation(
                "upstream.base_url must be an http:// URL".to_string(),
            ));
        }
        if self.dashboard.person.trim().is_empty() {
            return Err(ConfigError::Validation(
                "dashboard.person must not be empty".to_string(),
            ));
        }
        if self.dashboard.refresh_seconds == 0 {
            return Err(ConfigError::Validation(
                "dashboard.refresh_seconds must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            person: DEFAULT_PERSON.to_string(),
            refresh_seconds: 10,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "eved=info,eve_app=info,eve_adapter_http_hyper=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
