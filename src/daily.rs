//! Per-day views of a forecast series: the sky overview (dominant condition
//! per day plus the overall distribution) and the detailed daily table.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::conditions::ConditionCounts;
use crate::constants::UNKNOWN_CONDITION;
use crate::models::ForecastEntry;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCondition {
    pub date: NaiveDate,
    pub condition: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkyOverview {
    /// One entry per date, in the order dates first appear
    pub days: Vec<DayCondition>,
    pub condition_counts: ConditionCounts,
}

/// One row of the daily summary table; every number rounded to two decimals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub avg_temperature: f64,
    pub min_temperature: f64,
    pub max_temperature: f64,
    pub avg_humidity: f64,
    pub avg_pressure: f64,
    pub dominant_condition: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineSample {
    pub timestamp: NaiveDateTime,
    pub celsius: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub condition: String,
}

/// Everything the multi-panel analysis view shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailedAnalysis {
    pub timeline: Vec<TimelineSample>,
    pub condition_counts: ConditionCounts,
    pub daily: Vec<DailySummary>,
}

/// Dominant condition per date plus the whole-series condition counts
pub fn group_by_day(series: &[ForecastEntry]) -> SkyOverview {
    let mut buckets: Vec<(NaiveDate, Vec<&str>)> = Vec::new();
    for entry in series {
        let date = entry.date();
        match buckets.iter_mut().find(|(d, _)| *d == date) {
            Some((_, conditions)) => conditions.push(entry.condition.as_str()),
            None => buckets.push((date, vec![entry.condition.as_str()])),
        }
    }

    let days = buckets
        .into_iter()
        .map(|(date, conditions)| DayCondition {
            date,
            condition: dominant_or_unknown(&ConditionCounts::from_conditions(conditions)),
        })
        .collect();

    SkyOverview {
        days,
        condition_counts: ConditionCounts::from_entries(series),
    }
}

/// One rounded summary row per date, ascending
pub fn aggregate_by_day(series: &[ForecastEntry]) -> Vec<DailySummary> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&ForecastEntry>> = BTreeMap::new();
    for entry in series {
        by_date.entry(entry.date()).or_default().push(entry);
    }

    by_date
        .into_iter()
        .map(|(date, entries)| summarize_day(date, &entries))
        .collect()
}

/// Builds the timeline, distribution and daily table in one pass over the series
pub fn detailed_analysis(series: &[ForecastEntry]) -> DetailedAnalysis {
    let timeline = series
        .iter()
        .map(|entry| TimelineSample {
            timestamp: entry.timestamp,
            celsius: entry.celsius(),
            humidity: entry.humidity,
            pressure: entry.pressure,
            condition: entry.condition.clone(),
        })
        .collect();

    DetailedAnalysis {
        timeline,
        condition_counts: ConditionCounts::from_entries(series),
        daily: aggregate_by_day(series),
    }
}

fn summarize_day(date: NaiveDate, entries: &[&ForecastEntry]) -> DailySummary {
    let temperatures: Vec<f64> = entries.iter().map(|e| e.celsius()).collect();
    let humidity: Vec<f64> = entries.iter().map(|e| e.humidity).collect();
    let pressure: Vec<f64> = entries.iter().map(|e| e.pressure).collect();

    let counts = ConditionCounts::from_entries(entries.iter().copied());

    DailySummary {
        date,
        avg_temperature: round2(mean(&temperatures)),
        min_temperature: round2(temperatures.iter().copied().fold(f64::INFINITY, f64::min)),
        max_temperature: round2(temperatures.iter().copied().fold(f64::NEG_INFINITY, f64::max)),
        avg_humidity: round2(mean(&humidity)),
        avg_pressure: round2(mean(&pressure)),
        dominant_condition: dominant_or_unknown(&counts),
    }
}

fn dominant_or_unknown(counts: &ConditionCounts) -> String {
    counts.dominant().unwrap_or(UNKNOWN_CONDITION).to_string()
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Two decimals, halves away from zero
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{entry, uniform_series};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    #[test]
    fn sky_counts_for_mostly_clear_series() {
        let mut series = uniform_series(3, 150.0, "Clear");
        series[5].condition = "Rain".to_string();
        series[6].condition = "Rain".to_string();

        let sky = group_by_day(&series);
        assert_eq!(sky.condition_counts.get("Clear"), 22);
        assert_eq!(sky.condition_counts.get("Rain"), 2);
        assert_eq!(sky.condition_counts.len(), 2);
        assert_eq!(sky.condition_counts.total(), series.len());
        assert!(sky.days.iter().all(|d| d.condition == "Clear"));
    }

    #[test]
    fn days_keep_first_seen_order() {
        let series = vec![
            entry("2024-03-01 18:00:00", 100.0, "Rain"),
            entry("2024-03-01 21:00:00", 100.0, "Clouds"),
            entry("2024-03-02 00:00:00", 100.0, "Snow"),
            entry("2024-03-03 00:00:00", 100.0, "Clear"),
        ];

        let sky = group_by_day(&series);
        let dates: Vec<_> = sky.days.iter().map(|d| d.date).collect();
        assert_eq!(dates, vec![date(1), date(2), date(3)]);
        // tie on the first day goes to whichever condition appeared first
        assert_eq!(sky.days[0].condition, "Rain");
        assert_eq!(sky.days[1].condition, "Snow");
    }

    #[test]
    fn per_day_dominant_is_local_to_the_day() {
        let series = vec![
            entry("2024-03-01 00:00:00", 100.0, "Clear"),
            entry("2024-03-01 03:00:00", 100.0, "Clear"),
            entry("2024-03-02 00:00:00", 100.0, "Rain"),
            entry("2024-03-02 03:00:00", 100.0, "Rain"),
            entry("2024-03-02 06:00:00", 100.0, "Clear"),
        ];

        let sky = group_by_day(&series);
        assert_eq!(sky.days[0].condition, "Clear");
        assert_eq!(sky.days[1].condition, "Rain");
    }

    #[test]
    fn empty_series_gives_empty_views() {
        let sky = group_by_day(&[]);
        assert!(sky.days.is_empty());
        assert_eq!(sky.condition_counts.total(), 0);
        assert!(aggregate_by_day(&[]).is_empty());
    }

    #[test]
    fn humidity_mean_for_single_day() {
        let mut series = vec![
            entry("2024-03-01 00:00:00", 100.0, "Clear"),
            entry("2024-03-01 03:00:00", 100.0, "Clear"),
        ];
        series[0].humidity = 40.0;
        series[1].humidity = 60.0;

        let rows = aggregate_by_day(&series);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].avg_humidity, 50.0);
    }

    #[test]
    fn one_row_per_distinct_date_ascending() {
        let series = uniform_series(4, 100.0, "Clouds");
        let rows = aggregate_by_day(&series);
        let dates: Vec<_> = rows.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date(1), date(2), date(3), date(4)]);
    }

    #[test]
    fn table_rounds_every_column() {
        let mut series = vec![
            entry("2024-03-01 00:00:00", 201.0, "Clear"),
            entry("2024-03-01 03:00:00", 202.0, "Clear"),
            entry("2024-03-01 06:00:00", 202.0, "Rain"),
        ];
        series[0].humidity = 70.0;
        series[1].humidity = 71.0;
        series[2].humidity = 71.0;
        series[0].pressure = 1010.0;
        series[1].pressure = 1011.0;
        series[2].pressure = 1011.0;

        let row = &aggregate_by_day(&series)[0];
        assert_eq!(row.avg_temperature, 20.17);
        assert_eq!(row.min_temperature, 20.1);
        assert_eq!(row.max_temperature, 20.2);
        assert_eq!(row.avg_humidity, 70.67);
        assert_eq!(row.avg_pressure, 1010.67);
        assert_eq!(row.dominant_condition, "Clear");
    }

    #[test]
    fn table_dominant_tie_uses_first_seen() {
        let series = vec![
            entry("2024-03-01 00:00:00", 100.0, "Snow"),
            entry("2024-03-01 03:00:00", 100.0, "Clouds"),
        ];
        assert_eq!(aggregate_by_day(&series)[0].dominant_condition, "Snow");
    }

    #[test]
    fn detailed_analysis_bundles_all_panels() {
        let series = uniform_series(2, 180.0, "Drizzle");
        let analysis = detailed_analysis(&series);
        assert_eq!(analysis.timeline.len(), 16);
        assert_eq!(analysis.timeline[0].celsius, 18.0);
        assert_eq!(analysis.condition_counts.get("Drizzle"), 16);
        assert_eq!(analysis.daily.len(), 2);
    }

    #[test]
    fn shaping_is_repeatable() {
        let series = uniform_series(3, 95.0, "Mist");
        assert_eq!(group_by_day(&series), group_by_day(&series));
        assert_eq!(aggregate_by_day(&series), aggregate_by_day(&series));
    }

    #[test]
    fn round2_halves_away_from_zero() {
        assert_eq!(round2(2.5), 2.5);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
    }
}
