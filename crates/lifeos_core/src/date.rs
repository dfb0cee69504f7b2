//! ISO calendar helpers shared by the store and derived statistics.
//!
//! # Responsibility
//! - Parse and generate `YYYY-MM-DD` day keys.
//! - Derive sleep duration from wall-clock times with overnight wraparound.
//!
//! # Invariants
//! - Malformed input never panics; helpers degrade to empty/zero results.

use chrono::{Days, NaiveDate};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns the calendar-day prefix of an ISO timestamp.
///
/// Timestamps shorter than a full date are returned unchanged, so the result
/// can always be compared against day keys without panicking.
pub fn day_of(timestamp: &str) -> &str {
    timestamp.get(..10).unwrap_or(timestamp)
}

/// Returns whether the given ISO timestamp falls on the given calendar day.
pub fn is_on_day(timestamp: &str, date: &str) -> bool {
    day_of(timestamp) == date
}

/// Returns the `n` calendar days ending at `end` inclusive, oldest first.
///
/// Returns an empty vector when `end` is not a valid ISO date.
pub fn last_n_days(end: &str, n: u32) -> Vec<String> {
    let Ok(end) = NaiveDate::parse_from_str(end, DATE_FORMAT) else {
        return Vec::new();
    };

    (0..n)
        .rev()
        .filter_map(|offset| end.checked_sub_days(Days::new(u64::from(offset))))
        .map(|day| day.format(DATE_FORMAT).to_string())
        .collect()
}

/// Computes sleep duration in minutes from `HH:MM` bed and wake times.
///
/// A wake time earlier than the bed time means the night wrapped past
/// midnight, so a full day is added. Malformed times yield 0.
pub fn sleep_duration_minutes(bed_time: &str, wake_time: &str) -> u32 {
    let (Some(bed), Some(wake)) = (minutes_of_day(bed_time), minutes_of_day(wake_time)) else {
        return 0;
    };

    if wake >= bed {
        wake - bed
    } else {
        wake + 24 * 60 - bed
    }
}

fn minutes_of_day(value: &str) -> Option<u32> {
    let (hours, minutes) = value.split_once(':')?;
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

#[cfg(test)]
mod tests {
    use super::{day_of, is_on_day, last_n_days, sleep_duration_minutes};

    #[test]
    fn day_of_takes_timestamp_prefix() {
        assert_eq!(day_of("2024-01-01T08:30:00Z"), "2024-01-01");
        assert_eq!(day_of("2024-01-01"), "2024-01-01");
        assert_eq!(day_of("bad"), "bad");
    }

    #[test]
    fn is_on_day_matches_prefix() {
        assert!(is_on_day("2024-01-01T23:59:59Z", "2024-01-01"));
        assert!(!is_on_day("2024-01-02T00:00:00Z", "2024-01-01"));
    }

    #[test]
    fn last_n_days_is_oldest_first_and_inclusive() {
        let days = last_n_days("2024-03-02", 3);
        assert_eq!(days, vec!["2024-02-29", "2024-03-01", "2024-03-02"]);
    }

    #[test]
    fn last_n_days_rejects_malformed_end() {
        assert!(last_n_days("not-a-date", 7).is_empty());
    }

    #[test]
    fn sleep_duration_same_day() {
        assert_eq!(sleep_duration_minutes("13:00", "14:30"), 90);
    }

    #[test]
    fn sleep_duration_wraps_past_midnight() {
        assert_eq!(sleep_duration_minutes("23:00", "07:00"), 8 * 60);
    }

    #[test]
    fn sleep_duration_malformed_is_zero() {
        assert_eq!(sleep_duration_minutes("25:00", "07:00"), 0);
        assert_eq!(sleep_duration_minutes("2300", "07:00"), 0);
    }
}
