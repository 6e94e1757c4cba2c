//! Plain-text rendering of a [`WeatherSummary`].

use meteo_core::{Language, WeatherSummary};
use std::fmt;

struct Labels {
    feels: &'static str,
    humidity: &'static str,
    wind: &'static str,
    uv: &'static str,
    pressure: &'static str,
    precip: &'static str,
    visibility: &'static str,
    sun: &'static str,
    today: &'static str,
    hours: &'static str,
    days: &'static str,
    background: &'static str,
}

const FR: Labels = Labels {
    feels: "Ressenti",
    humidity: "Humidité",
    wind: "Vent",
    uv: "Indice UV",
    pressure: "Pression",
    precip: "Risque de pluie",
    visibility: "Visibilité",
    sun: "Soleil",
    today: "Aujourd'hui",
    hours: "Heures restantes",
    days: "7 prochains jours",
    background: "Fond",
};

const EN: Labels = Labels {
    feels: "Feels like",
    humidity: "Humidity",
    wind: "Wind",
    uv: "UV index",
    pressure: "Pressure",
    precip: "Chance of rain",
    visibility: "Visibility",
    sun: "Sun",
    today: "Today",
    hours: "Remaining hours",
    days: "Next 7 days",
    background: "Background",
};

fn labels(lang: Language) -> &'static Labels {
    match lang {
        Language::Fr => &FR,
        Language::En => &EN,
    }
}

const BAR_WIDTH: usize = 20;

/// Daylight bar such as `[#########-----------]`.
fn sun_bar(progress: f64) -> String {
    let filled = ((progress.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Text view of a summary with labels in one language.
struct SummaryView<'a> {
    summary: &'a WeatherSummary,
    labels: &'static Labels,
    background: &'a str,
}

impl fmt::Display for SummaryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (s, l) = (self.summary, self.labels);

        writeln!(f, "{}", s.city)?;
        writeln!(f, "{}  {}°C", s.desc, s.temp)?;
        writeln!(
            f,
            "{}: {}°C   {}: {}%   {}: {} km/h",
            l.feels, s.feels, l.humidity, s.humidity, l.wind, s.wind
        )?;
        writeln!(f, "{}: {} ({})", l.uv, s.uv_index, s.uv_text)?;
        writeln!(
            f,
            "{}: {} hPa   {}: {}%   {}: {} km",
            l.pressure, s.pressure, l.precip, s.precip_prob, l.visibility, s.visibility_km
        )?;
        writeln!(
            f,
            "{}: {} {} {}  ({:.0}%, {})",
            l.sun,
            s.sunrise,
            sun_bar(s.sun_progress),
            s.sunset,
            s.sun_progress,
            s.sun_color
        )?;
        writeln!(f, "{}: {}°C / {}°C", l.today, s.max, s.min)?;

        if !s.hours.is_empty() {
            writeln!(f, "\n{}:", l.hours)?;
            for h in &s.hours {
                writeln!(f, "  {}  {} {}°C", h.time, h.emoji, h.temp)?;
            }
        }

        if !s.days.is_empty() {
            writeln!(f, "\n{}:", l.days)?;
            for d in &s.days {
                writeln!(f, "  {:<20} {} {}°C / {}°C", d.label, d.emoji, d.max, d.min)?;
            }
        }

        writeln!(f, "\n{}: {}", l.background, self.background)
    }
}

pub fn summary(s: &WeatherSummary, lang: Language, background: &str) -> String {
    SummaryView { summary: s, labels: labels(lang), background }.to_string()
}
