//! Wall-clock time arithmetic.
//!
//! All entry times are `HH:MM` strings in local time. Arithmetic happens on
//! minutes-since-midnight; results are decimal hours rounded to two places.
//! A start after the end yields a negative span; there is no midnight
//! rollover, the value is propagated as-is.

use crate::errors::ZeitlogError;
use crate::Result;

/// Parse an `HH:MM` clock time into minutes since midnight.
pub fn minutes_of(time: &str) -> Result<i64> {
    let (hours, minutes) = time
        .split_once(':')
        .ok_or_else(|| ZeitlogError::InvalidInput(format!("invalid clock time: {time:?}")))?;

    let hours: i64 = hours
        .parse()
        .map_err(|_| ZeitlogError::InvalidInput(format!("invalid clock time: {time:?}")))?;
    let minutes: i64 = minutes
        .parse()
        .map_err(|_| ZeitlogError::InvalidInput(format!("invalid clock time: {time:?}")))?;

    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return Err(ZeitlogError::InvalidInput(format!("clock time out of range: {time:?}")));
    }

    Ok(hours * 60 + minutes)
}

/// Elapsed decimal hours between two clock times, rounded to two places.
pub fn hours_between(start: &str, end: &str) -> Result<f64> {
    let span = minutes_of(end)? - minutes_of(start)?;
    Ok(round2(span as f64 / 60.0))
}

/// Round to two decimal places, the precision entries store.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
