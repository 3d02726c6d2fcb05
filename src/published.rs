/// Publish-date parsing for chapter date labels
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

/// Forms carrying an explicit offset, including `Date.toString()` output
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%a %b %d %Y %H:%M:%S GMT%z",
];

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%B %d, %Y, %I:%M %p",
    "%B %d, %Y %I:%M %p",
    "%B %d, %Y, %H:%M",
    "%B %d, %Y %H:%M",
    "%m/%d/%y, %I:%M %p",
    "%m/%d/%Y, %I:%M %p",
];

/// Earliest year a naive candidate may carry. `%Y` happily reads "24" as
/// year 24, so such candidates are skipped and later formats (`%y`) tried.
const MIN_YEAR: i32 = 1970;

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%y",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
];

/// Pick the string the date is read from.
///
/// A non-empty `datetime` attribute wins over the visible text, which is
/// trimmed. Returns an empty string when neither is usable.
pub fn resolve_date_text(datetime_attr: Option<String>, text: Option<String>) -> String {
    if let Some(attr) = datetime_attr.filter(|a| !a.is_empty()) {
        return attr;
    }

    text.map(|t| t.trim().to_string()).unwrap_or_default()
}

/// Parse a chapter date label into a UTC timestamp
///
/// Accepts RFC 3339, RFC 2822, ISO-style date-times, `Date.toString()`
/// output and common calendar forms ("2024-01-03", "1/3/24",
/// "Jan 3, 2024, 10:30 AM"). Values without an offset are read as UTC.
/// Relative labels such as "2 days ago" are not understood, and dates
/// before 1970 are rejected; both yield `None`.
pub fn parse_published(text: &str) -> Option<DateTime<Utc>> {
    let text = strip_zone_name(text.trim());
    if text.is_empty() {
        return None;
    }

    parse_any(text).filter(|dt| dt.timestamp() >= 0)
}

/// `Date.toString()` appends the zone name in parentheses
fn strip_zone_name(text: &str) -> &str {
    match text.find(" (") {
        Some(idx) if text.ends_with(')') => text[..idx].trim_end(),
        _ => text,
    }
}

fn parse_any(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(text, fmt).ok())
    {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(naive) = DATE_TIME_FORMATS
        .iter()
        .filter_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .find(|naive| naive.year() >= MIN_YEAR)
    {
        return Some(naive.and_utc());
    }

    DATE_FORMATS
        .iter()
        .filter_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .find(|date| date.year() >= MIN_YEAR)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Parse a date label, treating anything unreadable as the Unix epoch
///
/// Unknown dates therefore sort last when newest-first.
pub fn published_or_epoch(text: &str) -> DateTime<Utc> {
    parse_published(text).unwrap_or_default()
}
