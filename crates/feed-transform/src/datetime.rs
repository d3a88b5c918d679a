//! Lenient date/time parsing and export formatting.
//!
//! Source timestamps arrive in a handful of formats; anything unparsable
//! becomes null rather than an error. The export contract wants dates as
//! `MM/DD/YYYY` and the single time-of-day field as `HH:MM`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M"];

/// Parse a timestamp, accepting date-only values at midnight.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(d.and_time(NaiveTime::MIN));
        }
    }
    None
}

/// Format a raw source date as `MM/DD/YYYY`; unparsable values become null.
pub fn format_export_date(value: Option<&str>) -> Option<String> {
    let dt = parse_datetime(value?)?;
    Some(dt.format("%m/%d/%Y").to_string())
}

/// Format a raw source time as `HH:MM`; unparsable values become null.
pub fn format_export_time(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(dt) = parse_datetime(trimmed) {
        return Some(dt.format("%H:%M").to_string());
    }
    for format in TIME_FORMATS {
        if let Ok(t) = NaiveTime::parse_from_str(trimmed, format) {
            return Some(t.format("%H:%M").to_string());
        }
    }
    None
}
