//! Configuration for the PokeAPI connector
//!
//! Settings are loaded from a YAML file; every field has a default so an
//! empty file (or no file at all) yields a working configuration.

use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default number of records requested per list page
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// Message serde_json produces when the API answers an unknown name with a
/// plain-text `Not Found` body instead of a JSON 404.
pub const DEFAULT_NOT_FOUND_PATTERN: &str = "expected value at line 1 column 1";

/// Complete connector configuration loaded from YAML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectorConfig {
    /// API root, e.g. `https://pokeapi.co/api/v2`
    pub base_url: String,

    /// `limit` sent with every list page request
    pub page_limit: u32,

    /// Transport-level request timeout in seconds (none = no timeout)
    pub timeout_secs: Option<u64>,

    /// User agent sent with every request
    pub user_agent: String,

    /// Client-side rate limit
    pub rate_limit: Option<RateLimitDef>,

    /// Error message substrings that mean "resource does not exist"
    pub not_found_patterns: Vec<String>,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_limit: DEFAULT_PAGE_LIMIT,
            timeout_secs: None,
            user_agent: format!("pokeapi-tables/{}", env!("CARGO_PKG_VERSION")),
            rate_limit: None,
            not_found_patterns: vec![DEFAULT_NOT_FOUND_PATTERN.to_string()],
        }
    }
}

/// Rate limit definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitDef {
    /// Maximum number of requests per second
    pub requests_per_second: u32,
    /// Burst size
    #[serde(default = "default_burst")]
    pub burst_size: u32,
}

fn default_burst() -> u32 {
    1
}

impl ConnectorConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the engine cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::config("base_url must not be empty"));
        }
        url::Url::parse(&self.base_url)?;
        if self.page_limit == 0 {
            return Err(Error::config("page_limit must be greater than zero"));
        }
        if let Some(rate) = &self.rate_limit {
            if rate.requests_per_second == 0 {
                return Err(Error::config(
                    "rate_limit.requests_per_second must be greater than zero",
                ));
            }
        }
        Ok(())
    }

    /// HTTP client settings derived from this configuration
    pub fn http_client_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(&self.base_url)
            .user_agent(&self.user_agent);
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(rate) = self.rate_limit {
            builder = builder.rate_limit(RateLimiterConfig::new(
                rate.requests_per_second,
                rate.burst_size,
            ));
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = ConnectorConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.page_limit, 20);
        assert!(config.timeout_secs.is_none());
        assert!(config.rate_limit.is_none());
        assert_eq!(
            config.not_found_patterns,
            vec![DEFAULT_NOT_FOUND_PATTERN.to_string()]
        );
    }

    #[test]
    fn test_config_from_yaml() {
        let yaml = r#"
base_url: "http://localhost:9000/api/v2"
page_limit: 50
timeout_secs: 10
rate_limit:
  requests_per_second: 5
not_found_patterns:
  - "expected value"
  - "invalid character 'N'"
"#;
        let config = ConnectorConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.base_url, "http://localhost:9000/api/v2");
        assert_eq!(config.page_limit, 50);
        assert_eq!(config.timeout_secs, Some(10));
        assert_eq!(
            config.rate_limit,
            Some(RateLimitDef {
                requests_per_second: 5,
                burst_size: 1
            })
        );
        assert_eq!(config.not_found_patterns.len(), 2);
        // Unset fields keep their defaults
        assert!(config.user_agent.starts_with("pokeapi-tables/"));
    }

    #[test]
    fn test_config_empty_yaml_is_default() {
        let config = ConnectorConfig::from_yaml("  \n").unwrap();
        assert_eq!(config, ConnectorConfig::default());
    }

    #[test]
    fn test_config_validation() {
        assert!(ConnectorConfig::from_yaml("page_limit: 0").is_err());
        assert!(ConnectorConfig::from_yaml("base_url: \"not a url\"").is_err());
        assert!(
            ConnectorConfig::from_yaml("rate_limit:\n  requests_per_second: 0").is_err()
        );
    }

    #[test]
    fn test_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "page_limit: 7").unwrap();

        let config = ConnectorConfig::from_file(file.path()).unwrap();
        assert_eq!(config.page_limit, 7);

        let missing = ConnectorConfig::from_file("/nonexistent/pokeapi.yaml");
        assert!(matches!(missing, Err(Error::Config { .. })));
    }

    #[test]
    fn test_http_client_config() {
        let config = ConnectorConfig {
            timeout_secs: Some(3),
            rate_limit: Some(RateLimitDef {
                requests_per_second: 4,
                burst_size: 2,
            }),
            ..ConnectorConfig::default()
        };
        let http = config.http_client_config();
        assert_eq!(http.base_url.as_deref(), Some(DEFAULT_BASE_URL));
        assert_eq!(http.timeout, Some(Duration::from_secs(3)));
        let rate = http.rate_limit.unwrap();
        assert_eq!(rate.requests_per_second, 4);
        assert_eq!(rate.burst_size, 2);
    }
}
