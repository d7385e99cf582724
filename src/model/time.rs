//! On-demand scalar conversions for wire strings
//!
//! Durations and timestamps stay in their wire form inside the models and
//! convert only when asked. A malformed value fails that conversion alone,
//! naming the offending string.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// Anchored ISO-8601 duration, integer components only (the API never
/// sends fractional ones).
static DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^P(?:(\d+)W)?(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?)?$")
        .expect("duration regex is valid")
});

/// Parse an ISO-8601 duration (`PT14H23M42S`) into whole seconds.
pub fn parse_duration(value: &str) -> Result<u64> {
    let malformed = || Error::MalformedDuration {
        value: value.to_string(),
    };

    let caps = DURATION_RE.captures(value).ok_or_else(malformed)?;

    let mut matched_any = false;
    let mut component = |index: usize| -> Result<u64> {
        match caps.get(index) {
            None => Ok(0),
            Some(m) => {
                matched_any = true;
                m.as_str().parse::<u64>().map_err(|_| malformed())
            }
        }
    };

    let weeks = component(1)?;
    let days = component(2)?;
    let hours = component(3)?;
    let minutes = component(4)?;
    let seconds = component(5)?;

    // "P" and "PT" satisfy the pattern but carry no components.
    if !matched_any {
        return Err(malformed());
    }

    Ok(weeks * 604_800 + days * 86_400 + hours * 3_600 + minutes * 60 + seconds)
}

/// Parse an RFC 3339 timestamp (`2019-06-01T12:00:00Z`) into UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| Error::MalformedTimestamp {
            value: value.to_string(),
        })
}
