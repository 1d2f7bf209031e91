use chrono::{DateTime, Local, TimeZone, Utc};

use super::locale::{Locale, TimeUnit};

/// Relative and absolute forms of a snapshot timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastUpdated {
    /// e.g. "5 minutes ago"
    pub relative: String,
    /// e.g. "2025-06-01 12:00:00"
    pub absolute: String,
}

impl LastUpdated {
    /// Build both labels for `timestamp` as seen at `now`, in local time.
    pub fn new(timestamp: DateTime<Utc>, now: DateTime<Utc>, locale: Locale) -> Self {
        Self {
            relative: format_time_ago(timestamp, now, locale),
            absolute: format_full(timestamp, &Local),
        }
    }
}

/// Format the time elapsed since `then`, in the largest whole unit
/// (seconds under a minute, minutes under an hour, hours under a day, then days).
///
/// Timestamps in the future count as zero seconds ago.
pub fn format_time_ago(then: DateTime<Utc>, now: DateTime<Utc>, locale: Locale) -> String {
    let secs = (now - then).num_seconds().max(0);

    if secs < 60 {
        locale.ago(secs, TimeUnit::Second)
    } else if secs < 3_600 {
        locale.ago(secs / 60, TimeUnit::Minute)
    } else if secs < 86_400 {
        locale.ago(secs / 3_600, TimeUnit::Hour)
    } else {
        locale.ago(secs / 86_400, TimeUnit::Day)
    }
}

/// Format a timestamp as `YYYY-MM-DD HH:MM:SS` in the given timezone.
pub fn format_full<Tz: TimeZone>(timestamp: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    timestamp.with_timezone(tz).format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_time_ago_buckets() {
        let now = at("2025-06-01T12:00:00Z");
        let en = Locale::En;

        assert_eq!(format_time_ago(now, now, en), "0 seconds ago");
        assert_eq!(format_time_ago(now - Duration::seconds(1), now, en), "1 second ago");
        assert_eq!(format_time_ago(now - Duration::seconds(59), now, en), "59 seconds ago");
        assert_eq!(format_time_ago(now - Duration::seconds(60), now, en), "1 minute ago");
        assert_eq!(format_time_ago(now - Duration::minutes(59), now, en), "59 minutes ago");
        assert_eq!(format_time_ago(now - Duration::hours(2), now, en), "2 hours ago");
        assert_eq!(format_time_ago(now - Duration::days(3), now, en), "3 days ago");
    }

    #[test]
    fn test_time_ago_zh() {
        let now = at("2025-06-01T12:00:00Z");
        assert_eq!(format_time_ago(now - Duration::minutes(5), now, Locale::Zh), "5分钟前");
        assert_eq!(format_time_ago(now - Duration::seconds(30), now, Locale::Zh), "30秒前");
    }

    #[test]
    fn test_future_timestamp_clamps() {
        let now = at("2025-06-01T12:00:00Z");
        assert_eq!(format_time_ago(now + Duration::seconds(30), now, Locale::En), "0 seconds ago");
    }

    #[test]
    fn test_format_full() {
        let ts = at("2025-06-01T12:00:05Z");
        assert_eq!(format_full(ts, &Utc), "2025-06-01 12:00:05");

        let cst = FixedOffset::east_opt(8 * 3600).unwrap();
        assert_eq!(format_full(ts, &cst), "2025-06-01 20:00:05");
    }
}
