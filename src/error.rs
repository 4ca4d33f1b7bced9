/// Errors produced while fetching or shaping a forecast
#[derive(Debug, thiserror::Error)]
pub enum ForecastError {
    #[error("Location must not be empty")]
    EmptyLocation,
    #[error("Location '{0}' not found")]
    LocationNotFound(String),
    #[error("Provider error: {0}")]
    Provider(String),
    #[error("No forecast data available")]
    EmptySeries,
}

impl From<reqwest::Error> for ForecastError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Provider(format!("request timed out: {}", err))
        } else {
            Self::Provider(err.to_string())
        }
    }
}

/// Startup configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("OPENWEATHER_API_KEY is not set")]
    MissingApiKey,
    #[error("Invalid timeout: {0}")]
    InvalidTimeout(String),
    #[error("Configuration error: {0}")]
    Source(#[from] config::ConfigError),
}
