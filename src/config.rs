//! Client configuration
//!
//! `ClientConfig` is the single place the API location lives. It is built
//! explicitly (builder, YAML, or environment) and handed to every client;
//! nothing in the crate reads a global base URL.

use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Largest page size the server accepts; larger values are clamped.
pub const MAX_PER_PAGE: u32 = 100;

/// Page size used when none is configured
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Environment variable holding the API base URL
pub const ENV_BASE_URL: &str = "MAILBADGER_URL";

/// Environment variable holding the request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "MAILBADGER_TIMEOUT_SECS";

/// Complete client configuration, loadable from YAML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the API server (e.g. "https://app.mailbadger.io")
    pub base_url: String,

    /// Route prefix of the dashboard pages
    #[serde(default = "default_dashboard_prefix")]
    pub dashboard_prefix: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Default page size for offset-paginated collections
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Optional client-side throttling
    #[serde(default)]
    pub rate_limit: Option<RateLimiterConfig>,
}

fn default_dashboard_prefix() -> String {
    "/dashboard".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("mailbadger-client/{}", env!("CARGO_PKG_VERSION"))
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

impl ClientConfig {
    /// Create a config pointing at `base_url` with defaults for everything else
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            dashboard_prefix: default_dashboard_prefix(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            per_page: default_per_page(),
            rate_limit: None,
        }
    }

    /// Parse a config from a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()
    }

    /// Load a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_yaml_str(&contents)
    }

    /// Build a config from `MAILBADGER_URL` and `MAILBADGER_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(ENV_BASE_URL)
            .map_err(|_| Error::config(format!("{ENV_BASE_URL} is not set")))?;
        let mut config = Self::new(base_url);

        if let Ok(raw) = std::env::var(ENV_TIMEOUT_SECS) {
            config.timeout_secs = raw
                .parse()
                .map_err(|_| Error::invalid_value("timeout_secs", format!("'{raw}' is not an integer")))?;
        }

        config.validate()
    }

    /// Check the config and normalize values the server would reject
    pub fn validate(mut self) -> Result<Self> {
        let parsed = url::Url::parse(&self.base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "base_url",
                format!("unsupported scheme '{}'", parsed.scheme()),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be positive"));
        }
        if self.per_page == 0 {
            return Err(Error::invalid_value("per_page", "must be positive"));
        }
        self.per_page = self.per_page.min(MAX_PER_PAGE);
        self.base_url = self.base_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Derive the HTTP client configuration
    pub fn http_config(&self) -> HttpClientConfig {
        let builder = HttpClientConfig::builder()
            .base_url(&self.base_url)
            .timeout(self.timeout())
            .user_agent(&self.user_agent);

        match &self.rate_limit {
            Some(limit) => builder.rate_limit(limit.clone()).build(),
            None => builder.build(),
        }
    }

    /// Dashboard route for a collection, e.g. "/dashboard/templates"
    pub fn dashboard_path(&self, collection: &str) -> String {
        format!(
            "{}/{}",
            self.dashboard_prefix.trim_end_matches('/'),
            collection.trim_start_matches('/')
        )
    }
}
