use chrono::NaiveDateTime;
use serde::Serialize;

use crate::conditions::ConditionCounts;
use crate::constants::COMFORT_TEMPERATURE;
use crate::error::ForecastError;
use crate::models::ForecastEntry;

/// Headline temperature figures for a whole series, in Celsius
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub avg: f64,
    pub max: f64,
    pub min: f64,
    pub dominant_condition: String,
}

impl Metrics {
    /// Distance of the average from the comfort temperature
    pub fn comfort_delta(&self) -> f64 {
        self.avg - COMFORT_TEMPERATURE
    }

    /// How far the maximum sits above the average
    pub fn above_average(&self) -> f64 {
        self.max - self.avg
    }

    /// How far the minimum sits below the average (negative)
    pub fn below_average(&self) -> f64 {
        self.min - self.avg
    }
}

/// One point on the temperature trend line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperaturePoint {
    pub timestamp: NaiveDateTime,
    pub celsius: f64,
}

/// Average, extremes and most common condition of a non-empty series
pub fn summarize(series: &[ForecastEntry]) -> Result<Metrics, ForecastError> {
    if series.is_empty() {
        return Err(ForecastError::EmptySeries);
    }

    let temperatures: Vec<f64> = series.iter().map(ForecastEntry::celsius).collect();
    let avg = temperatures.iter().sum::<f64>() / temperatures.len() as f64;
    let max = temperatures.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = temperatures.iter().copied().fold(f64::INFINITY, f64::min);

    let dominant_condition = ConditionCounts::from_entries(series)
        .dominant()
        .ok_or(ForecastError::EmptySeries)?
        .to_string();

    Ok(Metrics {
        avg,
        max,
        min,
        dominant_condition,
    })
}

/// Celsius reading per sample, in series order
pub fn temperature_trend(series: &[ForecastEntry]) -> Vec<TemperaturePoint> {
    series
        .iter()
        .map(|entry| TemperaturePoint {
            timestamp: entry.timestamp,
            celsius: entry.celsius(),
        })
        .collect()
}
