//! WMO weather-code classification.
//!
//! Every known code maps to a fixed entry (band, emoji, localized text); the
//! band decides the background gradient. Codes outside the table get the
//! generic fallback: a description naming the code, no emoji and the neutral
//! gradient.
//!
//! See: https://open-meteo.com/en/docs#weathervariables

use serde::{Deserialize, Serialize};

use crate::locale::Language;

/// Sky-condition groups of the WMO code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Clear,
    Cloudy,
    Fog,
    Drizzle,
    Rain,
    Snow,
    Showers,
    Thunderstorm,
}

/// CSS background gradient shown behind a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gradient {
    Clear,
    Cloudy,
    Rain,
    Snow,
    Storm,
    Neutral,
}

impl Gradient {
    pub fn css(&self) -> &'static str {
        match self {
            Gradient::Clear => "linear-gradient(to top, #48c6ef, #6f86d6)",
            Gradient::Cloudy => "linear-gradient(to top, #bdc3c7, #2c3e50)",
            Gradient::Rain => "linear-gradient(to top, #00c6fb, #005bea)",
            Gradient::Snow => "linear-gradient(to top, #e0eafc, #cfdef3)",
            Gradient::Storm => "linear-gradient(to top, #200122, #6f0000)",
            Gradient::Neutral => "linear-gradient(to top, #e0eafc, #8e9eab)",
        }
    }
}

impl Band {
    pub fn gradient(&self) -> Gradient {
        match self {
            Band::Clear => Gradient::Clear,
            Band::Cloudy => Gradient::Cloudy,
            Band::Rain | Band::Showers => Gradient::Rain,
            Band::Snow => Gradient::Snow,
            Band::Thunderstorm => Gradient::Storm,
            Band::Fog | Band::Drizzle => Gradient::Neutral,
        }
    }
}

#[derive(Debug)]
struct WmoEntry {
    code: i32,
    band: Band,
    emoji: &'static str,
    fr: &'static str,
    en: &'static str,
}

const fn entry(
    code: i32,
    band: Band,
    emoji: &'static str,
    fr: &'static str,
    en: &'static str,
) -> WmoEntry {
    WmoEntry { code, band, emoji, fr, en }
}

// Sorted by code; looked up with a binary search.
static WMO_TABLE: &[WmoEntry] = &[
    entry(0, Band::Clear, "☀️", "Ciel dégagé", "Clear sky"),
    entry(1, Band::Clear, "🌤️", "Plutôt clair", "Mainly clear"),
    entry(2, Band::Cloudy, "⛅", "Partiellement nuageux", "Partly cloudy"),
    entry(3, Band::Cloudy, "☁️", "Couvert", "Overcast"),
    entry(45, Band::Fog, "🌫️", "Brouillard", "Fog"),
    entry(48, Band::Fog, "🌫️", "Brouillard givrant", "Depositing rime fog"),
    entry(51, Band::Drizzle, "🌦️", "Bruine légère", "Light drizzle"),
    entry(53, Band::Drizzle, "🌦️", "Bruine modérée", "Moderate drizzle"),
    entry(55, Band::Drizzle, "🌧️", "Bruine forte", "Dense drizzle"),
    entry(61, Band::Rain, "🌦️", "Pluie faible", "Slight rain"),
    entry(63, Band::Rain, "🌧️", "Pluie modérée", "Moderate rain"),
    entry(65, Band::Rain, "🌧️", "Pluie forte", "Heavy rain"),
    entry(66, Band::Rain, "🌧️", "Pluie verglaçante faible", "Light freezing rain"),
    entry(67, Band::Rain, "🌧️", "Pluie verglaçante forte", "Heavy freezing rain"),
    entry(71, Band::Snow, "🌨️", "Neige faible", "Slight snow fall"),
    entry(73, Band::Snow, "🌨️", "Neige modérée", "Moderate snow fall"),
    entry(75, Band::Snow, "❄️", "Neige forte", "Heavy snow fall"),
    entry(77, Band::Snow, "🌨️", "Grains de neige", "Snow grains"),
    entry(80, Band::Showers, "🌧️", "Averses faibles", "Slight rain showers"),
    entry(81, Band::Showers, "🌧️", "Averses modérées", "Moderate rain showers"),
    entry(82, Band::Showers, "🌧️", "Averses fortes", "Violent rain showers"),
    entry(85, Band::Snow, "🌨️", "Averses de neige faibles", "Slight snow showers"),
    entry(86, Band::Snow, "🌨️", "Averses de neige fortes", "Heavy snow showers"),
    entry(95, Band::Thunderstorm, "⛈️", "Orage", "Thunderstorm"),
    entry(96, Band::Thunderstorm, "⛈️", "Orage grêle léger", "Thunderstorm with slight hail"),
    entry(99, Band::Thunderstorm, "🌩️", "Orage grêle fort", "Thunderstorm with heavy hail"),
];

fn lookup(code: i32) -> Option<&'static WmoEntry> {
    WMO_TABLE
        .binary_search_by_key(&code, |e| e.code)
        .ok()
        .map(|idx| &WMO_TABLE[idx])
}

/// The three projections of one weather code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub code: i32,
    pub band: Option<Band>,
    pub description: String,
    pub emoji: &'static str,
    pub gradient: Gradient,
}

/// Classify a WMO code. Total: unknown codes yield the fallback condition.
pub fn classify(code: i32, lang: Language) -> Condition {
    match lookup(code) {
        Some(e) => {
            let text = match lang {
                Language::Fr => e.fr,
                Language::En => e.en,
            };
            Condition {
                code,
                band: Some(e.band),
                description: format!("{} {}", e.emoji, text),
                emoji: e.emoji,
                gradient: e.band.gradient(),
            }
        }
        None => Condition {
            code,
            band: None,
            description: lang.unknown_code(code),
            emoji: "",
            gradient: Gradient::Neutral,
        },
    }
}

/// Emoji alone; empty for unknown codes.
pub fn emoji(code: i32) -> &'static str {
    lookup(code).map(|e| e.emoji).unwrap_or("")
}
