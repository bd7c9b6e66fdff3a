//! Time utilities: duration rendering and epoch-millisecond conversion.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use std::fmt::Write;

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";

/// `HH:MM:SS`, zero padded, hours unbounded. Negative input renders as zero.
pub fn format_duration(ms: i64) -> String {
    let total_seconds = ms.max(0) / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

pub fn to_local(ms: i64) -> Option<DateTime<Local>> {
    DateTime::from_timestamp_millis(ms).map(|dt| dt.with_timezone(&Local))
}

/// RFC 3339 in local time; falls back to the raw number when out of range.
pub fn to_local_rfc3339(ms: i64) -> String {
    to_local(ms)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| ms.to_string())
}

/// True when chrono understands every specifier in `pattern`.
pub fn is_valid_pattern(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// "<date> at <time>" using the configured strftime patterns.
/// A pattern chrono cannot render falls back to the default one.
pub fn format_started(ms: i64, date_format: &str, time_format: &str) -> String {
    let Some(dt) = to_local(ms) else {
        return ms.to_string();
    };

    let mut out = String::new();
    if write!(out, "{} at {}", dt.format(date_format), dt.format(time_format)).is_err() {
        log::warn!("cannot render '{date_format}' / '{time_format}', using defaults");
        out = format!(
            "{} at {}",
            dt.format(DEFAULT_DATE_FORMAT),
            dt.format(DEFAULT_TIME_FORMAT)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_durations() {
        assert_eq!(format_duration(0), "00:00:00");
        assert_eq!(format_duration(5_000), "00:00:05");
        assert_eq!(format_duration(5_999), "00:00:05");
        assert_eq!(format_duration(3_723_000), "01:02:03");
        assert_eq!(format_duration(-42), "00:00:00");
    }

    #[test]
    fn hours_are_not_wrapped() {
        assert_eq!(format_duration(100 * 3_600_000 + 59_000), "100:00:59");
    }

    #[test]
    fn started_uses_given_patterns() {
        let s = format_started(0, "%Y", "%M");
        assert!(s.contains(" at "));
        assert!(s.starts_with("1970") || s.starts_with("1969"));
    }

    #[test]
    fn unknown_specifier_falls_back_to_defaults() {
        let s = format_started(0, "%Q", "%H:%M:%S");
        let expected = format_started(0, DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT);
        assert_eq!(s, expected);
    }

    #[test]
    fn pattern_check() {
        assert!(is_valid_pattern("%Y-%m-%d"));
        assert!(is_valid_pattern("%d/%m %H:%M"));
        assert!(!is_valid_pattern("%Q"));
        assert!(!is_valid_pattern("%Y-%"));
    }
}
