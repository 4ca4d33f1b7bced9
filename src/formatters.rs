use crate::conditions::ConditionCounts;
use crate::constants::{COMFORT_TEMPERATURE, POPULAR_LOCATIONS, QUICK_LOCATIONS};
use crate::daily::{DetailedAnalysis, SkyOverview};
use crate::metrics::{Metrics, TemperaturePoint};
use crate::models::ForecastView;

const DAY_LABEL_FORMAT: &str = "%a, %b %d";
const TIMESTAMP_LABEL_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Formats the title line shown above every view
pub fn format_heading(view: ForecastView, days: u8, place: &str) -> String {
    let unit = if days == 1 { "day" } else { "days" };
    format!(
        "{} forecast for the next {} {} in {}\n\n",
        view.label(),
        days,
        unit,
        place
    )
}

/// Formats the key metrics panel
pub fn format_metrics(metrics: &Metrics) -> String {
    format!(
        "Key Weather Metrics:\n  Avg Temperature: {:.1}\u{00b0}C ({:+.1}\u{00b0}C from {:.0}\u{00b0}C comfort zone)\n  Max Temperature: {:.1}\u{00b0}C ({:+.1}\u{00b0}C vs avg)\n  Min Temperature: {:.1}\u{00b0}C ({:+.1}\u{00b0}C vs avg)\n  Most Common: {} {}\n\n",
        metrics.avg,
        metrics.comfort_delta(),
        COMFORT_TEMPERATURE,
        metrics.max,
        metrics.above_average(),
        metrics.min,
        metrics.below_average(),
        condition_icon(&metrics.dominant_condition),
        metrics.dominant_condition
    )
}

/// Formats the temperature trend as one line per sample
pub fn format_temperature_trend(trend: &[TemperaturePoint]) -> String {
    let mut output = String::from("Temperature Trend:\n");
    for point in trend {
        output.push_str(&format!(
            "  {}  {:.1}\u{00b0}C\n",
            point.timestamp.format(TIMESTAMP_LABEL_FORMAT),
            point.celsius
        ));
    }
    output
}

/// Formats the daily sky cards and the condition distribution
pub fn format_sky(sky: &SkyOverview) -> String {
    let mut output = String::from("Daily Sky Conditions:\n");
    for day in &sky.days {
        output.push_str(&format!(
            "  {}  {} {}\n",
            day.date.format(DAY_LABEL_FORMAT),
            condition_icon(&day.condition),
            day.condition
        ));
    }
    output.push('\n');
    output.push_str(&format_distribution(&sky.condition_counts));
    output
}

/// Formats the multi-panel analysis and the daily summary table
pub fn format_detailed(analysis: &DetailedAnalysis) -> String {
    let mut output = String::from("Weather Timeline:\n");
    for sample in &analysis.timeline {
        output.push_str(&format!(
            "  {}  {:.1}\u{00b0}C  {:.0}%  {:.0} hPa  {}\n",
            sample.timestamp.format(TIMESTAMP_LABEL_FORMAT),
            sample.celsius,
            sample.humidity,
            sample.pressure,
            sample.condition
        ));
    }
    output.push('\n');
    output.push_str(&format_distribution(&analysis.condition_counts));
    output.push('\n');

    output.push_str("Weather Data Summary:\n");
    output.push_str(
        "  Date        Avg Temp (\u{00b0}C)  Min Temp (\u{00b0}C)  Max Temp (\u{00b0}C)  Avg Humidity (%)  Avg Pressure (hPa)  Dominant Condition\n",
    );
    for row in &analysis.daily {
        output.push_str(&format!(
            "  {}  {:>13.2}  {:>13.2}  {:>13.2}  {:>16.2}  {:>18.2}  {}\n",
            row.date,
            row.avg_temperature,
            row.min_temperature,
            row.max_temperature,
            row.avg_humidity,
            row.avg_pressure,
            row.dominant_condition
        ));
    }
    output
}

fn format_distribution(counts: &ConditionCounts) -> String {
    let total = counts.total();
    let mut output = String::from("Weather Conditions Distribution:\n");
    for (condition, count) in counts.by_frequency() {
        let share = if total == 0 {
            0.0
        } else {
            count as f64 * 100.0 / total as f64
        };
        output.push_str(&format!(
            "  {} {}: {} ({:.1}%)\n",
            condition_icon(condition),
            condition,
            count,
            share
        ));
    }
    output
}

/// Formats the not-found message with suggestions
pub fn format_location_not_found(place: &str) -> String {
    format!(
        "Location '{}' not found. Please check the spelling and try again.\nTip: Try searching for major cities or include country names for better results.\nPopular locations to try: {}",
        place,
        POPULAR_LOCATIONS.join("; ")
    )
}

/// Formats the list of one-click locations
pub fn format_quick_locations() -> String {
    let mut output = String::from("Quick Locations:\n");
    for location in QUICK_LOCATIONS {
        output.push_str(&format!("  {}\n", location));
    }
    output
}

/// Maps a condition category to its display icon
pub fn condition_icon(condition: &str) -> &'static str {
    match condition {
        "Clear" => "\u{2600}\u{fe0f}",
        "Clouds" => "\u{2601}\u{fe0f}",
        "Rain" => "\u{1f327}\u{fe0f}",
        "Snow" => "\u{2744}\u{fe0f}",
        "Thunderstorm" => "\u{26c8}\u{fe0f}",
        "Drizzle" => "\u{1f326}\u{fe0f}",
        "Mist" => "\u{1f32b}\u{fe0f}",
        _ => "\u{1f324}\u{fe0f}",
    }
}
