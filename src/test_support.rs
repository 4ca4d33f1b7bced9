use chrono::NaiveDateTime;

use crate::constants::{DEFAULT_HUMIDITY, DEFAULT_PRESSURE, PROVIDER_TIMESTAMP_FORMAT};
use crate::models::{ForecastEntry, ForecastSeries};

pub fn entry(timestamp: &str, raw_temperature: f64, condition: &str) -> ForecastEntry {
    ForecastEntry {
        timestamp: NaiveDateTime::parse_from_str(timestamp, PROVIDER_TIMESTAMP_FORMAT).unwrap(),
        raw_temperature,
        condition: condition.to_string(),
        humidity: DEFAULT_HUMIDITY,
        pressure: DEFAULT_PRESSURE,
    }
}

/// `days` full days of three-hourly samples starting 2024-03-01, all with the same reading.
pub fn uniform_series(days: usize, raw_temperature: f64, condition: &str) -> ForecastSeries {
    (0..days * 8)
        .map(|i| {
            let ts = format!("2024-03-{:02} {:02}:00:00", 1 + i / 8, (i % 8) * 3);
            entry(&ts, raw_temperature, condition)
        })
        .collect()
}
