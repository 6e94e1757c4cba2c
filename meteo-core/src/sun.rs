use chrono::NaiveDateTime;
use tracing::warn;

/// Color of the daylight bar, shifting from morning to evening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SunColor {
    Morning,
    Midday,
    Evening,
}

impl SunColor {
    /// Band for a progress percentage: [0,33) morning, [33,66) midday,
    /// [66,100] evening.
    pub fn for_progress(progress: f64) -> Self {
        if progress >= 66.0 {
            SunColor::Evening
        } else if progress >= 33.0 {
            SunColor::Midday
        } else {
            SunColor::Morning
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            SunColor::Morning => "#f6d365",
            SunColor::Midday => "#fda085",
            SunColor::Evening => "#4b79a1",
        }
    }
}

/// Share of today's daylight already elapsed, in percent.
///
/// A window where sunset is not after sunrise (polar day/night, bad data)
/// reports 0.
pub fn progress(sunrise: NaiveDateTime, sunset: NaiveDateTime, now: NaiveDateTime) -> f64 {
    if sunset <= sunrise {
        warn!(%sunrise, %sunset, "daylight window is empty, sun progress clamped to 0");
        return 0.0;
    }
    if now <= sunrise {
        return 0.0;
    }
    if now >= sunset {
        return 100.0;
    }

    let elapsed = (now - sunrise).num_seconds() as f64;
    let daylight = (sunset - sunrise).num_seconds() as f64;
    (elapsed / daylight * 100.0).clamp(0.0, 100.0)
}
