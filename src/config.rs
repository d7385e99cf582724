//! Client configuration
//!
//! Holds everything needed to reach the API: credentials, base URL, and
//! transport tuning. Loadable from a YAML file or from the environment,
//! or assembled in code through the builder.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "YTDATA_API_KEY";

/// Environment variable overriding the base URL
pub const ENV_BASE_URL: &str = "YTDATA_BASE_URL";

/// Configuration for [`ApiClient`](crate::client::ApiClient)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API key sent as the `key` query parameter
    pub api_key: Option<String>,
    /// Bearer token sent as the `Authorization` header.
    ///
    /// Obtaining and refreshing the token is the caller's concern.
    pub access_token: Option<String>,
    /// Base URL for all requests
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum number of transport-level retries
    pub max_retries: u32,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            access_token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            max_retries: 3,
            user_agent: format!("ytdata/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Create a config with just an API key, everything else default
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_yaml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Build configuration from the environment.
    ///
    /// Reads [`ENV_API_KEY`] and [`ENV_BASE_URL`]; missing variables leave
    /// the defaults in place.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(key) = std::env::var(ENV_API_KEY) {
            if !key.is_empty() {
                config.api_key = Some(key);
            }
        }
        if let Ok(base) = std::env::var(ENV_BASE_URL) {
            if !base.is_empty() {
                config.base_url = base;
            }
        }
        config.validate()?;
        Ok(config)
    }

    /// Request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check the config for values that cannot work
    pub fn validate(&self) -> Result<Self> {
        Url::parse(&self.base_url)?;
        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }
        Ok(self.clone())
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Set a bearer access token
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.config.access_token = Some(token.into());
        self
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout in seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    /// Set max transport retries
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Validate and build the config
    pub fn build(self) -> Result<ClientConfig> {
        self.config.validate()
    }
}
