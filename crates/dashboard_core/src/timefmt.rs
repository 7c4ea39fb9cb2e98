//! World clock time rendering.
//!
//! # Invariants
//! - Output is `hh:mm:ss AM|PM` (zero-padded 12-hour clock).
//! - An unresolvable zone yields [`INVALID_TIMEZONE`]; other clocks are unaffected.
//! - Rendering is a pure function of the clock list and the instant.

use crate::model::record::RecordId;
use crate::model::world_clock::WorldClock;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Placeholder shown for a clock whose zone cannot be resolved.
pub const INVALID_TIMEZONE: &str = "Invalid timezone";
/// How often displayed times are recomputed while clocks are visible.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

const DISPLAY_FORMAT: &str = "%I:%M:%S %p";

/// Resolves an IANA zone identifier such as `Europe/London`.
///
/// Exact names win; otherwise letter case is ignored (`america/new_york`).
pub fn resolve_timezone(name: &str) -> Option<Tz> {
    name.parse::<Tz>()
        .ok()
        .or_else(|| Tz::from_str_insensitive(name).ok())
}

/// Renders `now` as local wall time in `timezone`.
pub fn format_time(timezone: &str, now: DateTime<Utc>) -> String {
    match resolve_timezone(timezone) {
        Some(tz) => now.with_timezone(&tz).format(DISPLAY_FORMAT).to_string(),
        None => INVALID_TIMEZONE.to_string(),
    }
}

/// Computes the id -> display string mapping for one tick.
pub fn render_times(clocks: &[WorldClock], now: DateTime<Utc>) -> BTreeMap<RecordId, String> {
    clocks
        .iter()
        .map(|clock| (clock.id.clone(), format_time(&clock.timezone, now)))
        .collect()
}

/// Cooperative periodic schedule for display recomputation.
///
/// The owner polls [`ClockTicker::due`] from its event loop; stopping the
/// ticker (or dropping it) leaves nothing running.
#[derive(Debug, Clone)]
pub struct ClockTicker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl ClockTicker {
    /// Starts a ticker whose first tick is due immediately.
    pub fn start(interval: Duration, at: Instant) -> Self {
        Self {
            interval,
            next_due: Some(at),
        }
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    /// Returns whether a recompute is due at `at`, and schedules the next one.
    pub fn due(&mut self, at: Instant) -> bool {
        match self.next_due {
            Some(deadline) if at >= deadline => {
                self.next_due = Some(at + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Time left until the next tick, `None` when stopped.
    pub fn remaining(&self, at: Instant) -> Option<Duration> {
        self.next_due.map(|deadline| deadline.saturating_duration_since(at))
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{format_time, render_times, ClockTicker, INVALID_TIMEZONE};
    use crate::model::world_clock::WorldClock;
    use chrono::{TimeZone, Utc};
    use std::time::{Duration, Instant};

    #[test]
    fn utc_renders_twelve_hour_clock() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 17, 4, 9).unwrap();
        assert_eq!(format_time("UTC", now), "05:04:09 PM");
    }

    #[test]
    fn zone_offset_is_applied() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 0, 30, 0).unwrap();
        assert_eq!(format_time("Asia/Tokyo", now), "09:30:00 AM");
        assert_eq!(format_time("America/New_York", now), "07:30:00 PM");
    }

    #[test]
    fn unknown_zone_renders_placeholder() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(format_time("Mars/Olympus_Mons", now), INVALID_TIMEZONE);
        assert_eq!(format_time("", now), INVALID_TIMEZONE);
    }

    #[test]
    fn one_bad_zone_does_not_affect_others() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let clocks = vec![
            WorldClock {
                id: "a".to_string(),
                city: "Nowhere".to_string(),
                timezone: "Not/AZone".to_string(),
            },
            WorldClock {
                id: "b".to_string(),
                city: "London".to_string(),
                timezone: "Europe/London".to_string(),
            },
        ];
        let times = render_times(&clocks, now);
        assert_eq!(times["a"], INVALID_TIMEZONE);
        assert_eq!(times["b"], "12:00:00 PM");
    }

    #[test]
    fn ticker_fires_once_per_interval_until_stopped() {
        let start = Instant::now();
        let mut ticker = ClockTicker::start(Duration::from_secs(1), start);
        assert!(ticker.due(start));
        assert!(!ticker.due(start + Duration::from_millis(500)));
        assert!(ticker.due(start + Duration::from_millis(1000)));

        ticker.stop();
        assert!(!ticker.is_active());
        assert!(!ticker.due(start + Duration::from_secs(10)));
        assert_eq!(ticker.remaining(start), None);
    }
}
