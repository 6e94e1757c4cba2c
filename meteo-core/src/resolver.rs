//! City name → [`WeatherSummary`].
//!
//! A resolution is two sequential calls (geocoding, then forecast for the
//! first candidate) followed by a pure derivation step. Nothing is retried
//! and nothing partial is ever returned.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, info, warn};

use crate::{
    Config,
    align::{self, RemainingHours},
    classify::{self, classify},
    config::Endpoints,
    error::{ResolveError, TransportError},
    locale::{Language, parse_local},
    model::{DayItem, Place, RawForecast, WeatherSummary, at, percent, round},
    provider::{HttpFetch, ReqwestFetch, forecast, geocoding},
    sun::{self, SunColor},
};

/// Days shown in the week-ahead list.
pub const FORECAST_DAYS: usize = 7;

#[derive(Debug, Clone)]
pub struct Resolver<F> {
    fetch: F,
    endpoints: Endpoints,
    language: Language,
}

impl<F: HttpFetch> Resolver<F> {
    pub fn new(fetch: F, endpoints: Endpoints, language: Language) -> Self {
        Self { fetch, endpoints, language }
    }

    /// Language used for the geocoding hint and every label.
    pub fn language(&self) -> Language {
        self.language
    }

    pub async fn resolve(&self, city: &str) -> Result<WeatherSummary, ResolveError> {
        let name = city.trim();
        if name.is_empty() {
            return Err(ResolveError::EmptyInput);
        }

        let place =
            geocoding::search(&self.fetch, &self.endpoints.geocoding_url, name, self.language)
                .await?
                .ok_or_else(|| ResolveError::PlaceNotFound(name.to_string()))?;

        info!(
            query = name,
            place = %place.label(),
            lat = place.latitude,
            lon = place.longitude,
            "resolved place"
        );

        let raw = forecast::fetch(
            &self.fetch,
            &self.endpoints.forecast_url,
            place.latitude,
            place.longitude,
        )
        .await?;

        Ok(derive_summary(&place, &raw, self.language)?)
    }
}

/// Construct a resolver backed by `reqwest` from on-disk settings.
pub fn resolver_from_config(config: &Config) -> anyhow::Result<Resolver<ReqwestFetch>> {
    let fetch = match config.timeout() {
        Some(timeout) => ReqwestFetch::with_timeout(timeout)?,
        None => ReqwestFetch::new(),
    };

    Ok(Resolver::new(fetch, config.endpoints.clone(), config.language))
}

fn malformed(reason: impl Into<String>) -> TransportError {
    TransportError::payload(forecast::ENDPOINT, reason)
}

fn required_time(series: &[Option<String>], field: &str) -> Result<NaiveDateTime, TransportError> {
    let raw = series
        .first()
        .and_then(Option::as_deref)
        .ok_or_else(|| malformed(format!("daily.{field} has no entry for today")))?;

    parse_local(raw)
        .ok_or_else(|| malformed(format!("daily.{field} is not a local timestamp: {raw}")))
}

fn required_value(series: &[Option<f64>], field: &str) -> Result<f64, TransportError> {
    at(series, 0).ok_or_else(|| malformed(format!("daily.{field} has no entry for today")))
}

/// Build the display summary for `place` from a forecast payload.
///
/// `current_weather.time` must parse as a local timestamp: sun progress and
/// the latest-past alignment need it as an instant, so an unparsable value
/// is a malformed payload even when an hourly entry matches it as a string.
/// Today's sunrise, sunset, max and min are required for the same reason.
pub fn derive_summary(
    place: &Place,
    raw: &RawForecast,
    lang: Language,
) -> Result<WeatherSummary, TransportError> {
    let current = &raw.current_weather;
    let hourly = &raw.hourly;
    let daily = &raw.daily;

    let now = parse_local(&current.time).ok_or_else(|| {
        malformed(format!("current_weather.time is not a local timestamp: {}", current.time))
    })?;

    let idx = align::current_index(&current.time, &hourly.time);
    match idx {
        Some(i) => debug!(now = %current.time, index = i, "aligned current hour"),
        None => warn!(now = %current.time, "no hourly entry matches the current time"),
    }

    // Aligned entry, else the first one, else 0.
    let aligned_or_first = |series: &[Option<f64>]| {
        idx.and_then(|i| at(series, i)).or_else(|| at(series, 0)).unwrap_or(0.0)
    };

    let humidity = idx.and_then(|i| at(&hourly.relative_humidity_2m, i)).map(percent).unwrap_or(0);
    let pressure = round(aligned_or_first(&hourly.surface_pressure));
    let visibility_km = round(aligned_or_first(&hourly.visibility) / 1000.0);

    let sunrise = required_time(&daily.sunrise, "sunrise")?;
    let sunset = required_time(&daily.sunset, "sunset")?;
    let sun_progress = sun::progress(sunrise, sunset, now);

    let uv_index = at(&daily.uv_index_max, 0).unwrap_or(0.0);
    let condition = classify(current.weathercode, lang);

    let hours = RemainingHours::new(hourly, &current.time, idx).collect();

    let days = daily
        .time
        .iter()
        .take(FORECAST_DAYS)
        .enumerate()
        .map(|(i, day)| DayItem {
            label: NaiveDate::parse_from_str(day, "%Y-%m-%d")
                .map(|date| lang.day_label(date))
                .unwrap_or_else(|_| day.clone()),
            max: at(&daily.temperature_2m_max, i).map(round).unwrap_or(0),
            min: at(&daily.temperature_2m_min, i).map(round).unwrap_or(0),
            emoji: classify::emoji(at(&daily.weather_code, i).unwrap_or(current.weathercode)),
        })
        .collect();

    Ok(WeatherSummary {
        city: place.label(),
        temp: round(current.temperature),
        feels: round(current.temperature),
        humidity,
        wind: round(current.windspeed),
        desc: condition.description,
        color: condition.gradient.css().to_string(),

        uv_index,
        uv_text: lang.uv_label(uv_index).to_string(),
        pressure,
        precip_prob: at(&daily.precipitation_probability_max, 0).map(percent).unwrap_or(0),
        visibility_km,

        sunrise: sunrise.format("%H:%M").to_string(),
        sunset: sunset.format("%H:%M").to_string(),
        sun_progress,
        sun_color: SunColor::for_progress(sun_progress).hex().to_string(),

        max: round(required_value(&daily.temperature_2m_max, "temperature_2m_max")?),
        min: round(required_value(&daily.temperature_2m_min, "temperature_2m_min")?),
        hours,
        days,
    })
}
