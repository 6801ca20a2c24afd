//! Timestamp extraction from Airflow log marker lines.
//!
//! Airflow prefixes each of its own log lines with a bracketed timestamp such
//! as `[2021-06-01 08:00:01,123] {taskinstance.py:1035} INFO - ...`. Only the
//! part of the bracket before the first comma is used.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::CoreError;

/// Naive formats tried in order, interpreted as UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Offset-bearing formats tried before the naive ones.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Return the text inside the line's first `[...]` bracket, cut at the first comma.
pub fn bracket_text(line: &str) -> Option<&str> {
    let inner = line.strip_prefix('[')?;
    let inner = inner.split(']').next()?;
    inner.split(',').next().map(str::trim)
}

/// Parse the timestamp carried by a marker line.
pub fn parse_marker_timestamp(line: &str) -> Result<DateTime<Utc>, CoreError> {
    let invalid = || CoreError::InvalidTimestamp {
        line: line.to_string(),
    };
    let text = bracket_text(line).ok_or_else(invalid)?;

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(text, format) {
            return Ok(dt.with_timezone(&Utc));
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(dt.and_utc());
        }
    }
    // Date-only brackets (e.g. "[2022-01-01, 08:00:00 UTC]") resolve to midnight.
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(invalid)
}

/// Seconds between two marker lines, rounded to the nearest second.
pub fn elapsed_secs(first: &str, last: &str) -> Result<i64, CoreError> {
    let start = parse_marker_timestamp(first)?;
    let end = parse_marker_timestamp(last)?;
    let millis = (end - start).num_milliseconds();
    Ok((millis as f64 / 1000.0).round() as i64)
}
