//! Locating "now" in the hourly series and walking the rest of today.

use crate::{
    classify,
    locale::{clock_label, parse_local},
    model::{HourItem, RawHourly, at, round},
};

/// One way of finding the hourly entry for the current instant.
type Strategy = fn(now: &str, times: &[String]) -> Option<usize>;

/// Applied in order; the first strategy that finds an entry wins.
const STRATEGIES: &[Strategy] = &[exact_match, same_hour, latest_past];

/// Index of the hourly entry representing `now`, or `None`.
pub fn current_index(now: &str, times: &[String]) -> Option<usize> {
    STRATEGIES.iter().find_map(|strategy| strategy(now, times))
}

fn exact_match(now: &str, times: &[String]) -> Option<usize> {
    times.iter().position(|t| t == now)
}

/// `YYYY-MM-DDTHH`
fn hour_key(ts: &str) -> Option<&str> {
    ts.get(..13)
}

/// `YYYY-MM-DD`
fn day_key(ts: &str) -> Option<&str> {
    ts.get(..10)
}

fn same_hour(now: &str, times: &[String]) -> Option<usize> {
    let key = hour_key(now)?;
    times.iter().position(|t| hour_key(t) == Some(key))
}

fn latest_past(now: &str, times: &[String]) -> Option<usize> {
    let now = parse_local(now)?;
    times
        .iter()
        .enumerate()
        .filter_map(|(i, t)| parse_local(t).map(|ts| (i, ts)))
        .filter(|(_, ts)| *ts <= now)
        // Ties keep the earliest index.
        .fold(None, |best: Option<(usize, _)>, (i, ts)| match best {
            Some((_, best_ts)) if best_ts >= ts => best,
            _ => Some((i, ts)),
        })
        .map(|(i, _)| i)
}

/// Remaining hours of today, starting at the aligned entry.
#[derive(Debug, Clone)]
pub struct RemainingHours<'a> {
    hourly: &'a RawHourly,
    today: &'a str,
    next: Option<usize>,
}

impl<'a> RemainingHours<'a> {
    /// `now` is the current-weather timestamp; its date is "today".
    pub fn new(hourly: &'a RawHourly, now: &'a str, start: Option<usize>) -> Self {
        let today = day_key(now).unwrap_or(now);
        Self { hourly, today, next: start }
    }
}

impl Iterator for RemainingHours<'_> {
    type Item = HourItem;

    fn next(&mut self) -> Option<HourItem> {
        let idx = self.next?;
        let ts = match self.hourly.time.get(idx) {
            Some(ts) if ts.starts_with(self.today) => ts,
            _ => {
                self.next = None;
                return None;
            }
        };
        self.next = Some(idx + 1);

        Some(HourItem {
            time: clock_label(ts),
            temp: at(&self.hourly.temperature_2m, idx).map(round).unwrap_or(0),
            emoji: at(&self.hourly.weather_code, idx).map(classify::emoji).unwrap_or(""),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn times(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn afternoon() -> Vec<String> {
        times(&["2025-08-29T15:00", "2025-08-29T16:00", "2025-08-29T17:00"])
    }

    #[test]
    fn exact_match_wins() {
        assert_eq!(current_index("2025-08-29T16:00", &afternoon()), Some(1));
    }

    #[test]
    fn same_hour_prefix_fallback() {
        assert_eq!(current_index("2025-08-29T16:45", &afternoon()), Some(1));
    }

    #[test]
    fn latest_past_fallback() {
        let series = times(&["2025-08-29T12:00", "2025-08-29T15:00", "2025-08-29T18:00"]);
        assert_eq!(current_index("2025-08-29T16:20", &series), Some(1));
    }

    #[test]
    fn latest_past_ignores_unparsable_entries() {
        let series = times(&["2025-08-29T12:00", "not-a-time", "2025-08-29T18:00"]);
        assert_eq!(current_index("2025-08-29T14:00", &series), Some(0));
    }

    #[test]
    fn earlier_than_everything_is_not_found() {
        assert_eq!(current_index("2025-08-29T08:00", &afternoon()), None);
    }

    #[test]
    fn empty_series_is_not_found() {
        assert_eq!(current_index("2025-08-29T16:00", &[]), None);
    }

    #[test]
    fn exact_match_takes_precedence_over_hour_prefix() {
        let series = times(&["2025-08-29T16:00", "2025-08-29T16:30"]);
        assert_eq!(current_index("2025-08-29T16:30", &series), Some(1));
    }

    fn hourly(ts: &[&str], temps: &[Option<f64>], codes: &[Option<i32>]) -> RawHourly {
        RawHourly {
            time: times(ts),
            temperature_2m: temps.to_vec(),
            weather_code: codes.to_vec(),
            ..Default::default()
        }
    }

    #[test]
    fn remaining_hours_stop_at_midnight() {
        let h = hourly(
            &["2025-08-29T22:00", "2025-08-29T23:00", "2025-08-30T00:00"],
            &[Some(18.4), Some(17.6), Some(16.0)],
            &[Some(0), Some(3), Some(61)],
        );
        let now = "2025-08-29T22:10";
        let items: Vec<_> = RemainingHours::new(&h, now, Some(0)).collect();

        assert_eq!(
            items,
            vec![
                HourItem { time: "22:00".into(), temp: 18, emoji: "☀️" },
                HourItem { time: "23:00".into(), temp: 18, emoji: "☁️" },
            ]
        );
    }

    #[test]
    fn remaining_hours_from_last_entry_is_single() {
        let h = hourly(
            &["2025-08-29T15:00", "2025-08-29T16:00", "2025-08-29T17:00"],
            &[Some(20.0), Some(21.0), Some(22.0)],
            &[Some(1), Some(1), Some(2)],
        );
        let items: Vec<_> = RemainingHours::new(&h, "2025-08-29T17:00", Some(2)).collect();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].time, "17:00");
        assert_eq!(items[0].temp, 22);
    }

    #[test]
    fn remaining_hours_empty_when_not_aligned() {
        let h = hourly(&["2025-08-29T15:00"], &[Some(20.0)], &[Some(0)]);
        assert_eq!(RemainingHours::new(&h, "2025-08-29T15:00", None).count(), 0);
    }

    #[test]
    fn remaining_hours_default_missing_values() {
        let h = hourly(&["2025-08-29T15:00", "2025-08-29T16:00"], &[None], &[Some(13)]);
        let items: Vec<_> = RemainingHours::new(&h, "2025-08-29T15:00", Some(0)).collect();
        assert_eq!(items[0], HourItem { time: "15:00".into(), temp: 0, emoji: "" });
        assert_eq!(items[1], HourItem { time: "16:00".into(), temp: 0, emoji: "" });
    }

    #[test]
    fn remaining_hours_is_fused_after_end() {
        let h = hourly(&["2025-08-29T23:00"], &[Some(10.0)], &[Some(0)]);
        let mut it = RemainingHours::new(&h, "2025-08-29T23:00", Some(0));
        assert!(it.next().is_some());
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }
}
