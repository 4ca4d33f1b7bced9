use chrono::{NaiveDate, NaiveDateTime};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_HUMIDITY, DEFAULT_PRESSURE, PROVIDER_TIMESTAMP_FORMAT, TEMPERATURE_SCALE,
    UNKNOWN_CONDITION,
};
use crate::error::ForecastError;

// ============================================================================
// OpenWeatherMap API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ProviderResponse {
    /// Status code echoed in the body; a string on most responses, a number on some
    #[serde(default)]
    pub cod: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<serde_json::Value>,
    /// Raw samples; each one is only decoded once it survives truncation
    #[serde(default)]
    pub list: Option<Vec<serde_json::Value>>,
}

impl ProviderResponse {
    /// Body-level "not found" signal, independent of the HTTP status.
    pub fn reports_not_found(&self) -> bool {
        match &self.cod {
            Some(serde_json::Value::String(code)) => code == "404",
            Some(serde_json::Value::Number(code)) => code.as_u64() == Some(404),
            _ => false,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProviderEntry {
    pub main: ProviderMain,
    #[serde(default)]
    pub weather: Vec<ProviderCondition>,
    pub dt_txt: String,
}

#[derive(Debug, Deserialize)]
pub struct ProviderMain {
    pub temp: f64,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ProviderCondition {
    pub main: String,
}

// ============================================================================
// Forecast Models
// ============================================================================

/// One three-hourly forecast sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastEntry {
    pub timestamp: NaiveDateTime,
    /// Temperature in provider units (tenths of a degree)
    pub raw_temperature: f64,
    pub condition: String,
    /// Relative humidity, percent
    pub humidity: f64,
    /// Sea-level pressure, hPa
    pub pressure: f64,
}

impl ForecastEntry {
    /// Temperature converted from provider units to Celsius
    pub fn celsius(&self) -> f64 {
        self.raw_temperature / TEMPERATURE_SCALE
    }

    /// Calendar date of the sample, as the provider reports it
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

impl TryFrom<serde_json::Value> for ForecastEntry {
    type Error = ForecastError;

    fn try_from(raw: serde_json::Value) -> Result<Self, Self::Error> {
        let entry: ProviderEntry = serde_json::from_value(raw)
            .map_err(|e| ForecastError::Provider(format!("malformed forecast entry: {}", e)))?;
        Self::try_from(entry)
    }
}

impl TryFrom<ProviderEntry> for ForecastEntry {
    type Error = ForecastError;

    fn try_from(entry: ProviderEntry) -> Result<Self, Self::Error> {
        let timestamp = NaiveDateTime::parse_from_str(&entry.dt_txt, PROVIDER_TIMESTAMP_FORMAT)
            .map_err(|e| {
                ForecastError::Provider(format!("invalid timestamp '{}': {}", entry.dt_txt, e))
            })?;

        let condition = entry
            .weather
            .into_iter()
            .next()
            .map(|c| c.main)
            .unwrap_or_else(|| UNKNOWN_CONDITION.to_string());

        Ok(Self {
            timestamp,
            raw_temperature: entry.main.temp,
            condition,
            humidity: entry.main.humidity.unwrap_or(DEFAULT_HUMIDITY),
            pressure: entry.main.pressure.unwrap_or(DEFAULT_PRESSURE),
        })
    }
}

/// Forecast samples in provider order (ascending timestamp)
pub type ForecastSeries = Vec<ForecastEntry>;

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub enum ForecastView {
    #[default]
    Temperature,
    Sky,
    #[serde(alias = "Detailed Analysis")]
    DetailedAnalysis,
}

impl ForecastView {
    /// Display name of the view
    pub fn label(&self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Sky => "Sky",
            Self::DetailedAnalysis => "Detailed Analysis",
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize, JsonSchema)]
pub struct GetForecastViewRequest {
    /// Place name to forecast
    pub location: Option<String>,
    /// One of the quick locations; takes precedence over `location`
    pub quick_location: Option<String>,
    /// Forecast window in days (1-5, default 3)
    pub days: Option<u8>,
    /// Which view to render (default Temperature)
    pub view: Option<ForecastView>,
    /// Include the key metrics panel (default true)
    pub show_metrics: Option<bool>,
}

impl GetForecastViewRequest {
    /// The place this request resolves to: the quick pick if given, else the typed location.
    pub fn resolved_location(&self) -> Option<&str> {
        [self.quick_location.as_deref(), self.location.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|place| !place.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_entry(json: serde_json::Value) -> ProviderEntry {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn converts_provider_entry() {
        let entry = ForecastEntry::try_from(provider_entry(serde_json::json!({
            "dt": 1700000000,
            "main": { "temp": 215.0, "humidity": 70, "pressure": 1008 },
            "weather": [{ "id": 500, "main": "Rain", "description": "light rain" }],
            "dt_txt": "2024-03-01 09:00:00"
        })))
        .unwrap();

        assert_eq!(entry.condition, "Rain");
        assert_eq!(entry.celsius(), 21.5);
        assert_eq!(entry.humidity, 70.0);
        assert_eq!(entry.pressure, 1008.0);
        assert_eq!(entry.date(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn missing_humidity_and_pressure_use_defaults() {
        let entry = ForecastEntry::try_from(provider_entry(serde_json::json!({
            "main": { "temp": 100.0 },
            "weather": [{ "main": "Clear" }],
            "dt_txt": "2024-03-01 00:00:00"
        })))
        .unwrap();

        assert_eq!(entry.humidity, DEFAULT_HUMIDITY);
        assert_eq!(entry.pressure, DEFAULT_PRESSURE);
    }

    #[test]
    fn empty_weather_array_is_unknown() {
        let entry = ForecastEntry::try_from(provider_entry(serde_json::json!({
            "main": { "temp": 100.0 },
            "weather": [],
            "dt_txt": "2024-03-01 00:00:00"
        })))
        .unwrap();

        assert_eq!(entry.condition, UNKNOWN_CONDITION);
    }

    #[test]
    fn bad_timestamp_is_a_provider_error() {
        let result = ForecastEntry::try_from(provider_entry(serde_json::json!({
            "main": { "temp": 100.0 },
            "weather": [{ "main": "Clear" }],
            "dt_txt": "yesterday"
        })));

        assert!(matches!(result, Err(ForecastError::Provider(_))));
    }

    #[test]
    fn raw_entry_without_main_is_a_provider_error() {
        let result = ForecastEntry::try_from(serde_json::json!({
            "weather": [{ "main": "Clear" }],
            "dt_txt": "2024-03-01 00:00:00"
        }));

        assert!(matches!(result, Err(ForecastError::Provider(_))));
    }

    #[test]
    fn not_found_cod_as_string_or_number() {
        let as_string: ProviderResponse =
            serde_json::from_str(r#"{"cod":"404","message":"city not found"}"#).unwrap();
        let as_number: ProviderResponse =
            serde_json::from_str(r#"{"cod":404,"message":"city not found"}"#).unwrap();
        let ok: ProviderResponse = serde_json::from_str(r#"{"cod":"200","list":[]}"#).unwrap();

        assert!(as_string.reports_not_found());
        assert!(as_number.reports_not_found());
        assert!(!ok.reports_not_found());
    }

    #[test]
    fn quick_location_overrides_typed_location() {
        let request = GetForecastViewRequest {
            location: Some("Berlin".to_string()),
            quick_location: Some("Tokyo".to_string()),
            ..Default::default()
        };
        assert_eq!(request.resolved_location(), Some("Tokyo"));
    }

    #[test]
    fn blank_location_resolves_to_none() {
        let request = GetForecastViewRequest {
            location: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(request.resolved_location(), None);
    }

    #[test]
    fn view_accepts_display_label() {
        let view: ForecastView = serde_json::from_str(r#""Detailed Analysis""#).unwrap();
        assert_eq!(view, ForecastView::DetailedAnalysis);
    }
}
