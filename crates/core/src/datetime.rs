//! Normalization of user-entered date/time values to ISO-8601.
//!
//! Booking and availability times are typed into date-time inputs and sent
//! to the backend as ISO-8601 UTC strings with millisecond precision. Inputs
//! that carry no offset are read as UTC. Malformed inputs yield `None` and a
//! warning; they never panic.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Naive layouts accepted from date-time inputs, tried in order.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a user or API supplied date/time into UTC.
pub fn parse_datetime(input: &str) -> Option<DateTime<Utc>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Render a timestamp the way the backend expects it
/// (`2025-03-07T09:00:00.000Z`).
pub fn format_iso(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Normalize a date/time input to an ISO-8601 UTC string.
///
/// Returns `None` (and logs) when the input cannot be parsed.
pub fn to_iso_string(input: &str) -> Option<String> {
    match parse_datetime(input) {
        Some(ts) => Some(format_iso(&ts)),
        None => {
            tracing::warn!(input = %input, "Unparseable date/time value");
            None
        }
    }
}
