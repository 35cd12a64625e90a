//! Date string parsing (`Date.parse`)
//!
//! Accepts the forms the host commonly accepts: RFC 3339 / ISO 8601 with
//! or without an offset, date-time with a space separator and unpadded
//! fields (`2022-1-21 12:24:11`), RFC 2822, US `M/D/Y`, month-name forms
//! (`Nov 5, 2024`), `YYYY-MM` and a bare `YYYY`. Timestamps without an
//! offset are read as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Largest absolute time value a Date may hold (±100,000,000 days)
pub const MAX_TIME_MS: f64 = 8.64e15;

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%b %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M:%S",
];

const OFFSET_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%B %d %Y",
    "%d %b %Y",
    "%d %B %Y",
    "%a %b %d %Y",
];

/// Parse a date string into milliseconds since the Unix epoch.
///
/// Returns `None` when the text is not a recognised date or the instant
/// falls outside the representable range.
///
/// # Examples
///
/// ```
/// use js_value::parse_date;
///
/// assert_eq!(parse_date("1970-01-02"), Some(86_400_000.0));
/// assert!(parse_date("2022-1-21 12:24:11").is_some());
/// assert!(parse_date("not a date").is_none());
/// ```
pub fn parse_date(text: &str) -> Option<f64> {
    let s = text.trim();
    if s.is_empty() {
        return None;
    }
    let ms = parse_with_offset(s)
        .or_else(|| parse_naive(s))
        .or_else(|| parse_partial(s))?;
    let clipped = time_clip(ms);
    (!clipped.is_nan()).then_some(clipped)
}

/// TimeClip: non-finite or out-of-range values become NaN, others are
/// truncated to whole milliseconds.
pub fn time_clip(ms: f64) -> f64 {
    if !ms.is_finite() || ms.abs() > MAX_TIME_MS {
        f64::NAN
    } else {
        ms.trunc() + 0.0
    }
}

fn parse_with_offset(s: &str) -> Option<f64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis() as f64);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.timestamp_millis() as f64);
    }
    OFFSET_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.timestamp_millis() as f64)
}

fn parse_naive(s: &str) -> Option<f64> {
    let s = s.strip_suffix('Z').unwrap_or(s);
    let date_time = DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;
    Some(date_time.and_utc().timestamp_millis() as f64)
}

/// `YYYY-MM` and `YYYY`
fn parse_partial(s: &str) -> Option<f64> {
    let is_year = |part: &str| part.len() == 4 && part.bytes().all(|b| b.is_ascii_digit());
    let (year, month) = match s.split_once('-') {
        Some((y, m)) if is_year(y) && (1..=2).contains(&m.len()) => (y, m),
        None if is_year(s) => (s, "1"),
        _ => return None,
    };
    let date = NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis() as f64)
}

/// Current time in milliseconds, for `Date.now()`-style construction
pub(crate) fn now_ms() -> f64 {
    Utc::now().timestamp_millis() as f64
}
