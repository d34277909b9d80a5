//! Period range resolution.
//!
//! Maps a named period to concrete inclusive date bounds relative to a
//! reference date. Bounds are zero-padded ISO strings, so lexical order is
//! date order.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::constants::{RANGE_MAX_SENTINEL, RANGE_MIN_SENTINEL};
use crate::types::{DateRange, Period};

const DATE_FMT: &str = "%Y-%m-%d";

/// Resolve `period` against `today`.
///
/// - `Week` runs from the ISO Monday of the current week through today.
/// - `Month` covers the full calendar month (leap-aware).
/// - `Custom` uses the caller-supplied bounds verbatim; missing bounds fall
///   back to the unbounded sentinels. No check that from ≤ to.
pub fn resolve_range(
    period: Period,
    today: NaiveDate,
    custom_from: Option<&str>,
    custom_to: Option<&str>,
) -> DateRange {
    let today_str = today.format(DATE_FMT).to_string();

    match period {
        Period::Today => DateRange { start: today_str.clone(), end: today_str },
        Period::Week => {
            let monday = today - Days::new(u64::from(today.weekday().num_days_from_monday()));
            DateRange { start: monday.format(DATE_FMT).to_string(), end: today_str }
        }
        Period::Month => {
            let first = today.with_day(1).unwrap_or(today);
            let last = first + Months::new(1) - Days::new(1);
            DateRange {
                start: first.format(DATE_FMT).to_string(),
                end: last.format(DATE_FMT).to_string(),
            }
        }
        Period::Year => DateRange {
            start: format!("{:04}-01-01", today.year()),
            end: format!("{:04}-12-31", today.year()),
        },
        Period::All => DateRange::unbounded(),
        Period::Custom => DateRange {
            start: custom_from.unwrap_or(RANGE_MIN_SENTINEL).to_string(),
            end: custom_to.unwrap_or(RANGE_MAX_SENTINEL).to_string(),
        },
    }
}
