//! Coordinates → current, hourly and daily forecast.

use crate::{error::TransportError, model::RawForecast};

use super::HttpFetch;

pub const ENDPOINT: &str = "forecast";

pub const HOURLY: &[&str] = &[
    "temperature_2m",
    "weather_code",
    "visibility",
    "surface_pressure",
    "relative_humidity_2m",
];

pub const DAILY: &[&str] = &[
    "temperature_2m_max",
    "temperature_2m_min",
    "sunrise",
    "sunset",
    "uv_index_max",
    "precipitation_probability_max",
    "weather_code",
];

fn query(latitude: f64, longitude: f64) -> Vec<(&'static str, String)> {
    vec![
        ("latitude", latitude.to_string()),
        ("longitude", longitude.to_string()),
        ("current_weather", "true".to_string()),
        ("hourly", HOURLY.join(",")),
        ("daily", DAILY.join(",")),
        ("timezone", "auto".to_string()),
    ]
}

/// Forecast for a coordinate pair, in the location's own time zone.
pub async fn fetch<F: HttpFetch>(
    http: &F,
    url: &str,
    latitude: f64,
    longitude: f64,
) -> Result<RawForecast, TransportError> {
    let body = http.get(ENDPOINT, url, &query(latitude, longitude)).await?;
    serde_json::from_str(&body).map_err(|e| TransportError::payload(ENDPOINT, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_names_every_series() {
        let q = query(48.85, 2.35);
        assert!(q.contains(&("latitude", "48.85".to_string())));
        assert!(q.contains(&("current_weather", "true".to_string())));
        assert!(q.contains(&("timezone", "auto".to_string())));
        assert!(q.contains(&(
            "hourly",
            "temperature_2m,weather_code,visibility,surface_pressure,relative_humidity_2m"
                .to_string()
        )));

        let daily = &q.iter().find(|(k, _)| *k == "daily").unwrap().1;
        assert!(daily.starts_with("temperature_2m_max,temperature_2m_min,sunrise,sunset"));
    }
}
