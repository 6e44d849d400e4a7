//! Home API client configuration.

use std::time::Duration;

use serde::Deserialize;

/// Where the home API lives and how long to wait for it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpApiConfig {
    /// Base URL, e.g. `http://127.0.0.1:8000`. Paths are appended to it.
    pub base_url: String,
    /// Per-request timeout in seconds. Unset means wait indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for HttpApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_secs: None,
        }
    }
}

impl HttpApiConfig {
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_local_api_without_timeout() {
        let config = HttpApiConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert!(config.timeout().is_none());
    }

    #[test]
    fn should_parse_from_toml() {
        let config: HttpApiConfig = toml::from_str(
            "
            base_url = 'http://hub.local:9000'
            timeout_secs = 3
            ",
        )
        .unwrap();
        assert_eq!(config.base_url, "http://hub.local:9000");
        assert_eq!(config.timeout(), Some(Duration::from_secs(3)));
    }
}
