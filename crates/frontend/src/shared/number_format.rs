//! Number formatting for counters (plays, attendees, followers)

/// Compact counter: below 1000 as-is, then one decimal with a K / M suffix.
/// A trailing `.0` is dropped.
///
/// ```
/// use frontend::shared::number_format::format_count;
/// assert_eq!(format_count(12_400), "12.4K");
/// ```
pub fn format_count(value: u64) -> String {
    let (scaled, suffix) = match value {
        v if v >= 1_000_000 => (v as f64 / 1_000_000.0, "M"),
        v if v >= 1_000 => (v as f64 / 1_000.0, "K"),
        v => return v.to_string(),
    };
    let formatted = format!("{:.1}", (scaled * 10.0).floor() / 10.0);
    format!("{}{}", formatted.trim_end_matches(".0"), suffix)
}

/// "1 thing" / "3 things"
pub fn pluralize(count: u64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", format_count(count), plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1K");
        assert_eq!(format_count(1_050), "1K");
        assert_eq!(format_count(12_400), "12.4K");
        assert_eq!(format_count(999_999), "999.9K");
        assert_eq!(format_count(2_500_000), "2.5M");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "attendee", "attendees"), "1 attendee");
        assert_eq!(pluralize(0, "attendee", "attendees"), "0 attendees");
        assert_eq!(pluralize(1_200, "play", "plays"), "1.2K plays");
    }
}
