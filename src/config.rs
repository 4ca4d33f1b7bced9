//! Provider settings, loaded from `OPENWEATHER_*` environment variables.

use std::fmt;

use config::{Config, Environment};
use serde::Deserialize;

use crate::constants::{DEFAULT_TIMEOUT_SECS, OPENWEATHER_API_BASE};
use crate::error::ConfigError;

/// Prefix of every environment variable the server reads
const ENV_PREFIX: &str = "OPENWEATHER";

/// Forecast provider settings
#[derive(Clone, Deserialize)]
pub struct ForecastConfig {
    /// OpenWeatherMap API key
    #[serde(default)]
    pub api_key: String,
    /// Base URL for the provider, without trailing slash
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_base() -> String {
    OPENWEATHER_API_BASE.to_string()
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl fmt::Debug for ForecastConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForecastConfig")
            .field("api_key", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ForecastConfig {
    /// Settings for `api_key` with default base URL and timeout
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: default_api_base(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Overrides the provider base URL, dropping any trailing slash
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Overrides the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Loads settings from `OPENWEATHER_API_KEY`, `OPENWEATHER_API_BASE` and
    /// `OPENWEATHER_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        let settings = Config::builder().add_source(environment).build()?;

        let loaded: Self = settings
            .try_deserialize()
            .map_err(|e| ConfigError::InvalidTimeout(e.to_string()))?;

        let api_key = loaded.api_key.trim();
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        let api_base = match loaded.api_base.trim() {
            "" => default_api_base(),
            base => base.to_string(),
        };

        Ok(Self::new(api_key)
            .with_api_base(api_base)
            .with_timeout_secs(loaded.timeout_secs))
    }
}
