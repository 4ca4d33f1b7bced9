use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::config::ForecastConfig;
use crate::constants::{MAX_FORECAST_DAYS, MIN_FORECAST_DAYS, SAMPLES_PER_DAY, USER_AGENT};
use crate::error::ForecastError;
use crate::models::{ForecastEntry, ForecastSeries, ProviderResponse};

/// Pulls three-hourly forecasts from OpenWeatherMap
#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Arc<Client>,
    config: ForecastConfig,
}

impl ForecastClient {
    /// Creates a client with the configured timeout and user agent
    pub fn new(config: ForecastConfig) -> Result<Self, ForecastError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            config,
        })
    }

    /// Fetches the forecast for `location` and keeps the first `days` worth of samples.
    ///
    /// `days` is clamped to the range the provider serves. Every call goes to
    /// the network; nothing is cached or retried.
    pub async fn fetch(&self, location: &str, days: u8) -> Result<ForecastSeries, ForecastError> {
        let location = location.trim();
        if location.is_empty() {
            return Err(ForecastError::EmptyLocation);
        }

        let requested = days;
        let days = clamp_days(requested);
        if days != requested {
            tracing::debug!("Clamped forecast days from {} to {}", requested, days);
        }
        tracing::info!("Fetching {}-day forecast for {}", days, location);

        let response = self.request(location).await?;
        let entries = response
            .list
            .ok_or_else(|| ForecastError::LocationNotFound(location.to_string()))?;

        let limit = sample_limit(days);
        if entries.len() > limit {
            tracing::debug!("Truncating {} samples to {}", entries.len(), limit);
        }

        entries
            .into_iter()
            .take(limit)
            .map(ForecastEntry::try_from)
            .collect()
    }

    async fn request(&self, location: &str) -> Result<ProviderResponse, ForecastError> {
        let url = format!("{}/forecast", self.config.api_base);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", location),
                ("units", "metric"),
                ("appid", self.config.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Forecast request failed: {}", e);
                ForecastError::from(e)
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ForecastError::LocationNotFound(location.to_string()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ProviderResponse>(&body)
                .ok()
                .and_then(|r| r.message)
                .map(|m| match m {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                })
                .unwrap_or(body);
            tracing::warn!("Provider returned {}: {}", status, detail);
            return Err(ForecastError::Provider(format!(
                "request failed with status {}: {}",
                status, detail
            )));
        }

        let body = response.text().await?;
        let data: ProviderResponse = serde_json::from_str(&body)
            .map_err(|e| ForecastError::Provider(format!("malformed response: {}", e)))?;

        if data.reports_not_found() {
            return Err(ForecastError::LocationNotFound(location.to_string()));
        }

        Ok(data)
    }
}

/// Limits a requested day count to the range the provider serves
pub fn clamp_days(days: u8) -> u8 {
    days.clamp(MIN_FORECAST_DAYS, MAX_FORECAST_DAYS)
}

/// Number of samples kept for a `days`-day forecast
pub fn sample_limit(days: u8) -> usize {
    SAMPLES_PER_DAY * usize::from(days)
}
