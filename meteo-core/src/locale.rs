use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display language for descriptions, labels and the geocoding hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }

    pub const fn all() -> &'static [Language] {
        &[Language::Fr, Language::En]
    }

    /// Generic description for a code missing from the WMO table.
    pub fn unknown_code(&self, code: i32) -> String {
        match self {
            Language::Fr => format!("Code météo {code}"),
            Language::En => format!("Weather code {code}"),
        }
    }

    /// Qualitative label for a daily maximum UV index.
    pub fn uv_label(&self, uv_index: f64) -> &'static str {
        let (low, moderate, high, very_high, extreme) = match self {
            Language::Fr => ("le plus faible", "modéré", "élevé", "très élevé", "extrême"),
            Language::En => ("low", "moderate", "high", "very high", "extreme"),
        };

        if uv_index < 3.0 {
            low
        } else if uv_index < 6.0 {
            moderate
        } else if uv_index < 8.0 {
            high
        } else if uv_index < 11.0 {
            very_high
        } else {
            extreme
        }
    }

    /// Day heading such as "vendredi 29/08" or "Friday 08/29".
    pub fn day_label(&self, date: NaiveDate) -> String {
        let weekday = self.weekday_name(date.weekday());
        match self {
            Language::Fr => format!("{weekday} {:02}/{:02}", date.day(), date.month()),
            Language::En => format!("{weekday} {:02}/{:02}", date.month(), date.day()),
        }
    }

    fn weekday_name(&self, day: Weekday) -> &'static str {
        match (self, day) {
            (Language::Fr, Weekday::Mon) => "lundi",
            (Language::Fr, Weekday::Tue) => "mardi",
            (Language::Fr, Weekday::Wed) => "mercredi",
            (Language::Fr, Weekday::Thu) => "jeudi",
            (Language::Fr, Weekday::Fri) => "vendredi",
            (Language::Fr, Weekday::Sat) => "samedi",
            (Language::Fr, Weekday::Sun) => "dimanche",
            (Language::En, Weekday::Mon) => "Monday",
            (Language::En, Weekday::Tue) => "Tuesday",
            (Language::En, Weekday::Wed) => "Wednesday",
            (Language::En, Weekday::Thu) => "Thursday",
            (Language::En, Weekday::Fri) => "Friday",
            (Language::En, Weekday::Sat) => "Saturday",
            (Language::En, Weekday::Sun) => "Sunday",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Language {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "fr" | "french" | "français" => Ok(Language::Fr),
            "en" | "english" => Ok(Language::En),
            _ => Err(anyhow::anyhow!("Unknown language '{value}'. Supported languages: fr, en.")),
        }
    }
}

/// Parse a local wall-clock timestamp as emitted with `timezone=auto`,
/// e.g. `2025-08-29T16:00` (seconds optional).
pub fn parse_local(ts: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// `HH:MM` of a local timestamp. Unparsable input falls back to the raw
/// time-of-day slice, or the whole string.
pub fn clock_label(ts: &str) -> String {
    match parse_local(ts) {
        Some(dt) => dt.format("%H:%M").to_string(),
        None => ts.get(11..16).unwrap_or(ts).to_string(),
    }
}
