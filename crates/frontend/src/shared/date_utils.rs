/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, NaiveDateTime, Utc};

/// Format ISO local datetime to a short event label
/// Example: "2026-11-03T20:00:00" -> "Tue 3 Nov · 20:00"
pub fn format_event_datetime(datetime_str: &str) -> String {
    match NaiveDateTime::parse_from_str(datetime_str, "%Y-%m-%dT%H:%M:%S") {
        Ok(dt) => dt.format("%a %-d %b · %H:%M").to_string(),
        Err(_) => datetime_str.to_string(),
    }
}

/// Age of a post relative to `now`
/// Example: 90 seconds -> "1m", 5 hours -> "5h", 3 days -> "3d", older -> "12 Oct"
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds();
    match secs {
        s if s < 60 => "just now".to_string(),
        s if s < 3600 => format!("{}m", s / 60),
        s if s < 86_400 => format!("{}h", s / 3600),
        s if s < 7 * 86_400 => format!("{}d", s / 86_400),
        _ => then.format("%-d %b").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_format_event_datetime() {
        assert_eq!(
            format_event_datetime("2026-11-03T20:00:00"),
            "Tue 3 Nov · 20:00"
        );
        assert_eq!(
            format_event_datetime("2026-12-31T23:30:00"),
            "Thu 31 Dec · 23:30"
        );
    }

    #[test]
    fn test_format_relative() {
        let now = Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();
        assert_eq!(format_relative(now - Duration::seconds(20), now), "just now");
        assert_eq!(format_relative(now - Duration::seconds(90), now), "1m");
        assert_eq!(format_relative(now - Duration::hours(5), now), "5h");
        assert_eq!(format_relative(now - Duration::days(3), now), "3d");
        assert_eq!(format_relative(now - Duration::days(10), now), "7 Oct");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_event_datetime("invalid"), "invalid");
    }
}
