//! Client configuration.

/// Base path of the station API on the backend origin.
pub const API_BASE_PATH: &str = "/api";

/// Origin used when nothing else is configured.
pub const DEFAULT_ORIGIN: &str = "http://localhost:8080";

/// Environment variable holding the backend origin.
pub const ORIGIN_ENV: &str = "STATION_FINDER_ORIGIN";

/// Environment variable overriding [`API_BASE_PATH`].
pub const API_BASE_ENV: &str = "STATION_FINDER_API_BASE";

/// Where the station backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme, host and port, without a trailing slash
    pub origin: String,
    /// Path prefix of the API, e.g. `/api`
    pub api_base: String,
}

impl ClientConfig {
    /// Create a config for the given origin with the default API base path.
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into().trim_end_matches('/').to_string(),
            api_base: API_BASE_PATH.to_string(),
        }
    }

    /// Set a custom API base path.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = normalize_base(&api_base.into());
        self
    }

    /// Read the config from `STATION_FINDER_ORIGIN` and `STATION_FINDER_API_BASE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let origin = lookup(ORIGIN_ENV)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ORIGIN.to_string());

        let config = Self::new(origin.trim());
        match lookup(API_BASE_ENV) {
            Some(base) => config.with_api_base(base),
            None => config,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ORIGIN)
    }
}

/// Leading slash, no trailing slash; empty stays empty.
fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.origin, DEFAULT_ORIGIN);
        assert_eq!(config.api_base, "/api");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ClientConfig::new("http://example.test/");
        assert_eq!(config.origin, "http://example.test");
    }

    #[test]
    fn api_base_is_normalized() {
        let config = ClientConfig::default().with_api_base("v2/");
        assert_eq!(config.api_base, "/v2");

        let config = ClientConfig::default().with_api_base("/");
        assert_eq!(config.api_base, "");
    }

    #[test]
    fn from_lookup_uses_defaults_when_unset() {
        let config = ClientConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn from_lookup_reads_variables() {
        let config = ClientConfig::from_lookup(lookup(&[
            (ORIGIN_ENV, "https://tanken.example/"),
            (API_BASE_ENV, "/backend/api"),
        ]));
        assert_eq!(config.origin, "https://tanken.example");
        assert_eq!(config.api_base, "/backend/api");
    }

    #[test]
    fn blank_origin_falls_back_to_default() {
        let config = ClientConfig::from_lookup(lookup(&[(ORIGIN_ENV, "  ")]));
        assert_eq!(config.origin, DEFAULT_ORIGIN);
    }
}
