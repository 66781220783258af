//! Daily wake-time computation.
//!
//! The scrape schedule is a fixed local wall-clock time of day. The next
//! wake instant is derived purely from a `now` snapshot, so a restart
//! re-derives the whole schedule from the clock alone.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use thiserror::Error;

/// Error returned when parsing a schedule target fails.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid schedule time '{input}': expected HH:MM:SS")]
pub struct InvalidScheduleTarget {
    input: String,
}

/// Fixed time of day at which the daily scrape fires.
///
/// Defaults to `05:00:00` local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleTarget(NaiveTime);

impl ScheduleTarget {
    /// Create a target from hour/minute/second components.
    ///
    /// Returns `None` if any component is out of range.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, second).map(Self)
    }

    /// Compute the next wake instant after `now`.
    ///
    /// If `now` is before the target time on the same day, the wake is
    /// today at the target; otherwise (exact equality included) it is
    /// tomorrow at the target. The result is always strictly later than
    /// `now`.
    ///
    /// Operates on naive local time: a DST transition during the wait
    /// shifts the effective interval to 23 or 25 hours.
    pub fn next_wake(&self, now: NaiveDateTime) -> NaiveDateTime {
        if now.time() < self.0 {
            now.date().and_time(self.0)
        } else {
            // succ_opt only fails at NaiveDate::MAX; saturate there.
            now.date()
                .succ_opt()
                .unwrap_or(NaiveDate::MAX)
                .and_time(self.0)
        }
    }
}

impl Default for ScheduleTarget {
    fn default() -> Self {
        Self(NaiveTime::from_hms_opt(5, 0, 0).unwrap_or_default())
    }
}

impl From<NaiveTime> for ScheduleTarget {
    fn from(time: NaiveTime) -> Self {
        Self(time)
    }
}

impl std::str::FromStr for ScheduleTarget {
    type Err = InvalidScheduleTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s, "%H:%M:%S")
            .ok()
            // %S admits the leap-second form; from_hms never does.
            .filter(|t| t.nanosecond() < 1_000_000_000)
            .map(Self)
            .ok_or_else(|| InvalidScheduleTarget {
                input: s.to_string(),
            })
    }
}

impl std::fmt::Display for ScheduleTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%H:%M:%S"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    fn target(h: u32, m: u32, s: u32) -> ScheduleTarget {
        ScheduleTarget::from_hms(h, m, s).unwrap()
    }

    #[test]
    fn test_next_wake_before_target_same_day() {
        let wake = target(5, 0, 0).next_wake(at(2024, 6, 1, 3, 30, 0));
        assert_eq!(wake, at(2024, 6, 1, 5, 0, 0));
    }

    #[test]
    fn test_next_wake_after_target_next_day() {
        let wake = target(5, 0, 0).next_wake(at(2024, 6, 1, 9, 15, 0));
        assert_eq!(wake, at(2024, 6, 2, 5, 0, 0));
    }

    #[test]
    fn test_next_wake_exactly_at_target_rolls_over() {
        let wake = target(5, 0, 0).next_wake(at(2024, 6, 1, 5, 0, 0));
        assert_eq!(wake, at(2024, 6, 2, 5, 0, 0));
    }

    #[test]
    fn test_next_wake_year_rollover() {
        let wake = target(5, 0, 0).next_wake(at(2024, 12, 31, 23, 0, 0));
        assert_eq!(wake, at(2025, 1, 1, 5, 0, 0));
    }

    #[test]
    fn test_next_wake_month_rollover() {
        let wake = target(5, 0, 0).next_wake(at(2024, 4, 30, 6, 0, 0));
        assert_eq!(wake, at(2024, 5, 1, 5, 0, 0));
    }

    #[test]
    fn test_next_wake_leap_day() {
        let wake = target(5, 0, 0).next_wake(at(2024, 2, 28, 12, 0, 0));
        assert_eq!(wake, at(2024, 2, 29, 5, 0, 0));
    }

    #[test]
    fn test_next_wake_strictly_future() {
        let t = target(5, 0, 0);
        for now in [
            at(2024, 6, 1, 0, 0, 0),
            at(2024, 6, 1, 4, 59, 59),
            at(2024, 6, 1, 5, 0, 0),
            at(2024, 6, 1, 5, 0, 1),
            at(2024, 6, 1, 23, 59, 59),
        ] {
            assert!(t.next_wake(now) > now, "wake must be after {now}");
        }
    }

    #[test]
    fn test_next_wake_is_pure() {
        // Re-computing mid-sleep with the same snapshot changes nothing.
        let t = target(5, 0, 0);
        let now = at(2024, 6, 1, 14, 0, 0);
        assert_eq!(t.next_wake(now), t.next_wake(now));
    }

    #[test]
    fn test_parse_valid() {
        let t: ScheduleTarget = "05:00:00".parse().unwrap();
        assert_eq!(t, ScheduleTarget::default());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("not a time".parse::<ScheduleTarget>().is_err());
        assert!("25:00:00".parse::<ScheduleTarget>().is_err());
        assert!("05:61:00".parse::<ScheduleTarget>().is_err());
        assert!("05:00:60".parse::<ScheduleTarget>().is_err());
        assert!("".parse::<ScheduleTarget>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        let t: ScheduleTarget = "23:15:07".parse().unwrap();
        assert_eq!(t.to_string(), "23:15:07");
    }

    #[test]
    fn test_default_is_five_am() {
        assert_eq!(ScheduleTarget::default().to_string(), "05:00:00");
    }

    #[test]
    fn test_from_hms_rejects_out_of_range() {
        assert!(ScheduleTarget::from_hms(24, 0, 0).is_none());
        assert!(ScheduleTarget::from_hms(5, 60, 0).is_none());
    }
}
