/// User agent string for HTTP requests
pub const USER_AGENT: &str = "mcp-forecast-dashboard/0.1.0";

/// OpenWeatherMap API base URL
pub const OPENWEATHER_API_BASE: &str = "https://api.openweathermap.org/data/2.5";

/// Default provider request timeout, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// The provider reports one sample every three hours.
pub const SAMPLES_PER_DAY: usize = 8;

/// Smallest forecast window the provider serves, in days
pub const MIN_FORECAST_DAYS: u8 = 1;

/// Largest forecast window the provider serves, in days
pub const MAX_FORECAST_DAYS: u8 = 5;

/// Forecast window used when a request names none
pub const DEFAULT_FORECAST_DAYS: u8 = 3;

/// Provider temperatures arrive in tenths of a degree.
pub const TEMPERATURE_SCALE: f64 = 10.0;

/// Humidity assumed when the provider omits it (percent)
pub const DEFAULT_HUMIDITY: f64 = 50.0;

/// Pressure assumed when the provider omits it (hPa)
pub const DEFAULT_PRESSURE: f64 = 1013.0;

/// Condition reported when no category can be determined
pub const UNKNOWN_CONDITION: &str = "Unknown";

/// Reference point for the "from comfort zone" metric, in Celsius
pub const COMFORT_TEMPERATURE: f64 = 20.0;

/// Timestamp layout of the provider's `dt_txt` field
pub const PROVIDER_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Locations offered as one-click picks
pub const QUICK_LOCATIONS: [&str; 6] = ["New York", "London", "Tokyo", "Paris", "Sydney", "Dubai"];

/// Suggestions shown when a location cannot be found
pub const POPULAR_LOCATIONS: [&str; 5] = [
    "New York, USA",
    "London, UK",
    "Tokyo, Japan",
    "Paris, France",
    "Sydney, Australia",
];
