use serde::{Deserialize, Serialize};

/// First geocoding candidate for a city name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Place {
    pub name: String,
    #[serde(default)]
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Place {
    /// Heading shown for a resolved city, e.g. "Paris (France)".
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.country)
    }
}

/// Forecast payload for one place, timestamps in the place's local zone.
#[derive(Debug, Clone, Deserialize)]
pub struct RawForecast {
    pub current_weather: RawCurrent,
    #[serde(default)]
    pub hourly: RawHourly,
    #[serde(default)]
    pub daily: RawDaily,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCurrent {
    pub temperature: f64,
    pub windspeed: f64,
    pub weathercode: i32,
    pub time: String,
}

/// Parallel series, index `i` of each is the instant `time[i]`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawHourly {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m: Vec<Option<f64>>,
    #[serde(default)]
    pub weather_code: Vec<Option<i32>>,
    #[serde(default)]
    pub visibility: Vec<Option<f64>>,
    #[serde(default)]
    pub surface_pressure: Vec<Option<f64>>,
    #[serde(default)]
    pub relative_humidity_2m: Vec<Option<f64>>,
}

/// Parallel daily series, index 0 is today.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDaily {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    pub temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    pub sunrise: Vec<Option<String>>,
    #[serde(default)]
    pub sunset: Vec<Option<String>>,
    #[serde(default)]
    pub uv_index_max: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation_probability_max: Vec<Option<f64>>,
    #[serde(default)]
    pub weather_code: Vec<Option<i32>>,
}

/// Value at `idx` of a nullable series; `None` when out of range or null.
pub(crate) fn at<T: Copy>(series: &[Option<T>], idx: usize) -> Option<T> {
    series.get(idx).copied().flatten()
}

/// One remaining hour of today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourItem {
    pub time: String,
    pub temp: i64,
    pub emoji: &'static str,
}

/// One day of the week-ahead forecast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayItem {
    pub label: String,
    pub max: i64,
    pub min: i64,
    pub emoji: &'static str,
}

/// Display-ready result of one resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSummary {
    pub city: String,
    pub temp: i64,
    /// Same as `temp`: current conditions carry no apparent temperature.
    pub feels: i64,
    pub humidity: u8,
    pub wind: i64,
    pub desc: String,
    pub color: String,

    pub uv_index: f64,
    pub uv_text: String,
    pub pressure: i64,
    pub precip_prob: u8,
    pub visibility_km: i64,

    pub sunrise: String,
    pub sunset: String,
    pub sun_progress: f64,
    pub sun_color: String,

    pub max: i64,
    pub min: i64,
    pub hours: Vec<HourItem>,
    pub days: Vec<DayItem>,
}

/// Round half away from zero to a whole number.
pub(crate) fn round(value: f64) -> i64 {
    value.round() as i64
}

/// Round a percentage into `0..=100`.
pub(crate) fn percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}
