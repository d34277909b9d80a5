//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

/// Reserved project label for break entries. Matched exactly.
pub const PAUSE_PROJECT: &str = "Pause";

/// Reserved project label for full-day absences. Matched case-insensitively.
pub const VACATION_PROJECT: &str = "Urlaub";

/// Hours credited for a vacation day when no override is configured.
pub const DEFAULT_VACATION_HOURS: f64 = 7.8;

/// Regular workday used for target comparisons in reports.
pub const DEFAULT_TARGET_HOURS: f64 = 7.8;

/// Timer runs at or below this length are discarded instead of stored.
pub const MIN_TIMER_ENTRY_SECS: i64 = 60;

/// Countdown length applied when the caller does not supply one.
pub const DEFAULT_COUNTDOWN_MINUTES: i64 = 60;

// Unbounded range sentinels. Zero-padded ISO dates compare lexically, so
// these sort below/above every real date.
pub const RANGE_MIN_SENTINEL: &str = "0000-00-00";
pub const RANGE_MAX_SENTINEL: &str = "9999-99-99";

/// Returns true when `project` is the reserved vacation label.
pub fn is_vacation_project(project: &str) -> bool {
    project.eq_ignore_ascii_case(VACATION_PROJECT)
}

/// Returns true when `project` is the reserved pause label.
pub fn is_pause_project(project: &str) -> bool {
    project == PAUSE_PROJECT
}
