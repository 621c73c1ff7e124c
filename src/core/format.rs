use std::fmt::Display;

use chrono::{DateTime, Datelike, Local, NaiveDateTime, TimeZone, Utc};
use url::Url;

/// Human readable age of `ts` as seen at `now`.
pub fn relative_time<Tz>(ts: &DateTime<Tz>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let elapsed = now.clone().signed_duration_since(ts.clone());
    let mins = elapsed.num_minutes();
    let hours = mins / 60;
    let days = hours / 24;

    if mins < 1 {
        "Just now".to_string()
    } else if mins < 60 {
        format!("{mins}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else if days < 7 {
        format!("{days}d ago")
    } else if ts.year() != now.year() {
        ts.format("%b %-d, %Y").to_string()
    } else {
        ts.format("%b %-d").to_string()
    }
}

/// Accepts RFC 3339 and offset-less ISO 8601 (taken as UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

pub fn format_created_at(raw: &str, now: &DateTime<Local>) -> String {
    match parse_timestamp(raw) {
        Some(ts) => relative_time(&ts.with_timezone(&Local), now),
        None => raw.to_string(),
    }
}

/// Last non-empty path segment of a profile URL, or the input unchanged
/// when it is not a URL.
pub fn extract_slug(raw: &str) -> String {
    Url::parse(raw)
        .ok()
        .and_then(|url| {
            url.path_segments()?
                .filter(|segment| !segment.is_empty())
                .last()
                .map(str::to_string)
        })
        .unwrap_or_else(|| raw.to_string())
}

/// First word of the best available display name.
pub fn first_name(profile_name: Option<&str>, session_name: Option<&str>) -> String {
    [profile_name, session_name]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|name| !name.is_empty())
        .and_then(|name| name.split(' ').next())
        .unwrap_or("User")
        .to_string()
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap()
    }

    fn ago(d: Duration) -> String {
        let now = now();
        relative_time(&(now - d), &now)
    }

    #[test]
    fn test_relative_time_buckets() {
        assert_eq!(ago(Duration::seconds(30)), "Just now");
        assert_eq!(ago(Duration::minutes(5)), "5m ago");
        assert_eq!(ago(Duration::hours(3)), "3h ago");
        assert_eq!(ago(Duration::days(2)), "2d ago");
    }

    #[test]
    fn test_relative_time_bucket_edges() {
        assert_eq!(ago(Duration::seconds(59)), "Just now");
        assert_eq!(ago(Duration::minutes(59)), "59m ago");
        assert_eq!(ago(Duration::minutes(60)), "1h ago");
        assert_eq!(ago(Duration::hours(24)), "1d ago");
        assert_eq!(ago(Duration::days(6)), "6d ago");
    }

    #[test]
    fn test_relative_time_calendar_dates() {
        assert_eq!(ago(Duration::days(10)), "Jun 5");
        assert_eq!(ago(Duration::days(400)), "May 11, 2025");
    }

    #[test]
    fn test_future_timestamp_is_just_now() {
        assert_eq!(ago(Duration::minutes(-5)), "Just now");
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = Utc.with_ymd_and_hms(2026, 10, 14, 9, 30, 0).unwrap();
        assert_eq!(parse_timestamp("2026-10-14T09:30:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2026-10-14T11:30:00+02:00"), Some(expected));
        assert_eq!(parse_timestamp("2026-10-14T09:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2026-10-14 09:30:00.000"), Some(expected));
        assert_eq!(parse_timestamp("yesterday"), None);
    }

    #[test]
    fn test_format_created_at_falls_back_to_raw() {
        assert_eq!(format_created_at("garbage", &Local::now()), "garbage");
    }

    #[test]
    fn test_extract_slug() {
        assert_eq!(
            extract_slug("https://www.linkedin.com/in/jane-doe/"),
            "jane-doe"
        );
        assert_eq!(
            extract_slug("https://www.linkedin.com/in/jane-doe?trk=x"),
            "jane-doe"
        );
        assert_eq!(extract_slug("not a url"), "not a url");
        assert_eq!(
            extract_slug("https://www.linkedin.com/in/jane doe/"),
            "jane%20doe"
        );
        assert_eq!(
            extract_slug("https://www.linkedin.com/"),
            "https://www.linkedin.com/"
        );
    }

    #[test]
    fn test_first_name_fallbacks() {
        assert_eq!(first_name(Some("Jane Doe"), Some("jd@x.io")), "Jane");
        assert_eq!(first_name(Some("  "), Some("Sam Lee")), "Sam");
        assert_eq!(first_name(None, None), "User");
    }
}
