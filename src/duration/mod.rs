// ABOUTME: Duration-to-clock-string formatting helpers
// ABOUTME: Renders durations as M:SS or H:MM:SS with zero-padded fields

use chrono::TimeDelta;
use std::time::Duration;

use crate::pad;

/// Format a duration as a clock string.
///
/// Durations under one hour render as `M:SS`, an hour or more as `H:MM:SS`.
/// Sub-second precision is truncated.
pub fn format_clock(duration: Duration) -> String {
    clock_from_secs(duration.as_secs())
}

/// Format a signed time delta as a clock string, `-` prefixed when negative
pub fn format_timedelta(delta: TimeDelta) -> String {
    let secs = delta.num_seconds();
    if secs < 0 {
        format!("-{}", clock_from_secs(secs.unsigned_abs()))
    } else {
        clock_from_secs(secs as u64)
    }
}

fn clock_from_secs(total: u64) -> String {
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    let ss = pad::left(&seconds.to_string(), 2, '0');
    if hours > 0 {
        let mm = pad::left(&minutes.to_string(), 2, '0');
        format!("{}:{}:{}", hours, mm, ss)
    } else {
        format!("{}:{}", minutes, ss)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_duration() {
        assert_eq!(format_clock(Duration::from_secs(0)), "0:00");
    }

    #[test]
    fn test_under_a_minute() {
        assert_eq!(format_clock(Duration::from_secs(7)), "0:07");
        assert_eq!(format_clock(Duration::from_secs(59)), "0:59");
    }

    #[test]
    fn test_minutes_and_seconds() {
        assert_eq!(format_clock(Duration::from_secs(61)), "1:01");
        assert_eq!(format_clock(Duration::from_secs(3599)), "59:59");
    }

    #[test]
    fn test_hours_zero_pad_minutes() {
        assert_eq!(format_clock(Duration::from_secs(3600)), "1:00:00");
        assert_eq!(format_clock(Duration::from_secs(3661)), "1:01:01");
        assert_eq!(format_clock(Duration::from_secs(86400)), "24:00:00");
    }

    #[test]
    fn test_subsecond_precision_truncates() {
        assert_eq!(format_clock(Duration::from_millis(1999)), "0:01");
    }

    #[test]
    fn test_timedelta_positive() {
        assert_eq!(format_timedelta(TimeDelta::seconds(125)), "2:05");
    }

    #[test]
    fn test_timedelta_negative() {
        assert_eq!(format_timedelta(TimeDelta::seconds(-3661)), "-1:01:01");
        assert_eq!(format_timedelta(TimeDelta::seconds(-5)), "-0:05");
    }
}
