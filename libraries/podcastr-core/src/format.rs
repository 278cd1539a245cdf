//! Display formatting for durations and publish dates

use crate::error::{CoreError, Result};
use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime};

/// Format used for publish dates in listings (e.g. "22 jan 21")
pub const PUBLISHED_AT_FORMAT: &str = "%-d %b %y";

/// Locale used when none is configured
pub const DEFAULT_LOCALE: Locale = Locale::pt_BR;

/// Render a length in seconds as `HH:MM:SS`
///
/// Hours are not wrapped at 24, so very long recordings stay readable.
pub fn duration_to_time_string(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Resolve a locale name such as `pt_BR` or `en_US`
pub fn parse_locale(name: &str) -> Result<Locale> {
    Locale::try_from(name).map_err(|_| CoreError::InvalidDate(format!("unknown locale: {}", name)))
}

/// Parse a publish timestamp as delivered by the episodes API
///
/// Accepts `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS`, RFC 3339 and a bare
/// `YYYY-MM-DD`.
pub fn parse_published_at(raw: &str) -> Result<NaiveDateTime> {
    let raw = raw.trim();

    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Ok(parsed);
        }
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.naive_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| CoreError::InvalidDate(raw.to_string()))
}

/// Parse and render a publish timestamp as `d MMM yy` in the given locale
pub fn format_published_at(raw: &str, locale: Locale) -> Result<String> {
    let parsed = parse_published_at(raw)?;
    Ok(parsed
        .and_utc()
        .format_localized(PUBLISHED_AT_FORMAT, locale)
        .to_string())
}
