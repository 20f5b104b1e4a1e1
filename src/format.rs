//! Display helpers for commits

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Characters kept by [`shorten_sha`]
pub const SHORT_SHA_LEN: usize = 7;

/// Default limit for [`truncate_message`]
pub const DEFAULT_MESSAGE_LIMIT: usize = 50;

/// Marker appended to truncated text
pub const ELLIPSIS: &str = "...";

/// Text returned for unparseable timestamps
pub const INVALID_DATE: &str = "Invalid Date";

/// ISO-8601 layouts with an explicit offset that RFC 3339 parsing rejects
const OFFSET_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M%:z",
];

/// ISO-8601 layouts without an offset, read as UTC
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// First seven characters of a SHA; shorter input is returned as is
pub fn shorten_sha(sha: &str) -> &str {
    sha.char_indices()
        .nth(SHORT_SHA_LEN)
        .map_or(sha, |(end, _)| &sha[..end])
}

/// First line of `message`, cut to `limit` characters plus [`ELLIPSIS`] if longer
///
/// Counts characters, not bytes, so multi-byte text is never split.
pub fn truncate_message(message: &str, limit: usize) -> String {
    let first_line = message.lines().next().unwrap_or_default();
    match first_line.char_indices().nth(limit) {
        Some((end, _)) => format!("{}{ELLIPSIS}", &first_line[..end]),
        None => first_line.to_string(),
    }
}

/// Render an ISO-8601 timestamp as e.g. `Jan 5, 2024, 03:07 PM` (UTC)
pub fn format_commit_date(date: &str) -> String {
    format_commit_date_in(date, &Utc)
}

/// Render an ISO-8601 timestamp in the given time zone
///
/// Timestamps without an offset, and date-only input, are taken as UTC.
/// Returns [`INVALID_DATE`] when `date` does not parse.
pub fn format_commit_date_in<Tz>(date: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    parse_iso_date(date).map_or_else(
        || INVALID_DATE.to_string(),
        |parsed| {
            parsed
                .with_timezone(tz)
                .format("%b %-d, %Y, %I:%M %p")
                .to_string()
        },
    )
}

fn parse_iso_date(date: &str) -> Option<DateTime<FixedOffset>> {
    let date = date.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(date) {
        return Some(parsed);
    }
    if let Some(parsed) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(date, fmt).ok())
    {
        return Some(parsed);
    }

    // `Z` on a timestamp RFC 3339 rejects, e.g. one without seconds
    let naive = date.strip_suffix('Z').unwrap_or(date);
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(naive, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(naive, "%Y-%m-%d")
                .ok()
                .and_then(|day| day.and_hms_opt(0, 0, 0))
        })
        .map(|utc| utc.and_utc().fixed_offset())
}
