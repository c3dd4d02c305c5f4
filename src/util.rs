use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Parses a `YYYY-MM-DD` calendar day. Surrounding whitespace is ignored.
pub fn parse_day(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Monday = 0 .. Sunday = 6.
pub fn weekday_index(date: &NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}

pub fn clamp_hour(hour: i64) -> usize {
    hour.clamp(0, 23) as usize
}

/// Ordering key for the commit graph: day plus hour, epoch when the day is missing.
pub fn commit_timestamp(day: Option<NaiveDate>, hour: Option<i64>) -> NaiveDateTime {
    let Some(day) = day else {
        return NaiveDateTime::UNIX_EPOCH;
    };
    let hour = hour.map(clamp_hour).unwrap_or(0) as u32;
    let time = NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN);
    day.and_time(time)
}

/// Trims `value` and substitutes `fallback` when nothing is left.
pub fn key_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => fallback,
    }
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn weekday_index_starts_on_monday() {
        // 2024-01-01 was a Monday, 2024-01-07 a Sunday
        assert_eq!(weekday_index(&parse_day("2024-01-01").unwrap()), 0);
        assert_eq!(weekday_index(&parse_day("2024-01-07").unwrap()), 6);
    }

    #[test]
    fn hours_are_clamped() {
        assert_eq!(clamp_hour(-5), 0);
        assert_eq!(clamp_hour(30), 23);
        assert_eq!(clamp_hour(12), 12);
    }

    #[test]
    fn missing_day_sorts_at_epoch() {
        assert_eq!(commit_timestamp(None, Some(5)), NaiveDateTime::UNIX_EPOCH);
        let ts = commit_timestamp(parse_day("2024-03-02"), None);
        assert_eq!(ts.to_string(), "2024-03-02 00:00:00");
    }

    #[test]
    fn key_or_falls_back_on_blank() {
        assert_eq!(key_or(Some("  Rust "), "Unknown"), "Rust");
        assert_eq!(key_or(Some("   "), "Unknown"), "Unknown");
        assert_eq!(key_or(None, "Unknown"), "Unknown");
    }

    #[test]
    fn bad_days_do_not_parse() {
        assert!(parse_day("2024-13-01").is_none());
        assert!(parse_day("").is_none());
    }
}
