//! Entry placement rules: vacation exclusivity and interval collisions
//!
//! Pure functions over an already-loaded day of entries. The service loads
//! the day once and runs both checks against it.

use zeitlog_domain::constants::is_vacation_project;
use zeitlog_domain::utils::time::minutes_of;
use zeitlog_domain::{Result, TimeEntry};

/// Vacation exclusivity: a vacation entry must be alone on its date.
///
/// Returns the first entry that violates the rule, skipping `exclude_id`
/// (the entry currently being edited).
pub fn vacation_conflict<'a>(
    day_entries: &'a [TimeEntry],
    new_is_vacation: bool,
    exclude_id: Option<&str>,
) -> Option<&'a TimeEntry> {
    day_entries
        .iter()
        .filter(|e| exclude_id != Some(e.id.as_str()))
        .find(|e| new_is_vacation || is_vacation_project(&e.project))
}

/// Find the first entry whose clock interval overlaps `[start, end)`.
///
/// Intervals are half-open: touching endpoints (one entry ending exactly
/// when another starts) never conflict. Vacation entries carry no real
/// clock interval and are skipped.
pub fn find_overlap<'a>(
    day_entries: &'a [TimeEntry],
    start: &str,
    end: &str,
    exclude_id: Option<&str>,
) -> Result<Option<&'a TimeEntry>> {
    let new_start = minutes_of(start)?;
    let new_end = minutes_of(end)?;

    for entry in day_entries {
        if exclude_id == Some(entry.id.as_str()) || is_vacation_project(&entry.project) {
            continue;
        }
        let (Ok(entry_start), Ok(entry_end)) =
            (minutes_of(&entry.start), minutes_of(&entry.end))
        else {
            continue;
        };
        if new_start < entry_end && new_end > entry_start {
            return Ok(Some(entry));
        }
    }

    Ok(None)
}
