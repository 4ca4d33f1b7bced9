//! Weather forecast dashboard served over MCP.
//!
//! The fetcher pulls three-hourly samples from OpenWeatherMap; the shaping
//! modules (`conditions`, `metrics`, `daily`) turn them into the temperature,
//! sky and detailed analysis views without touching the network.

pub mod conditions;
pub mod config;
pub mod constants;
pub mod daily;
pub mod error;
pub mod fetcher;
pub mod formatters;
pub mod metrics;
pub mod models;
pub mod service;

#[cfg(test)]
mod test_support;

pub use crate::config::ForecastConfig;
pub use error::{ConfigError, ForecastError};
pub use fetcher::ForecastClient;
pub use models::{ForecastEntry, ForecastSeries, ForecastView, GetForecastViewRequest};
pub use service::ForecastDashboard;
