//! Time entry types
//!
//! Entries keep wall-clock strings (`YYYY-MM-DD` dates, `HH:MM` times) as
//! their canonical representation. Zero-padded ISO dates compare correctly
//! as strings, which the range filters rely on.

use serde::{Deserialize, Serialize};

/// One unit of logged activity: a work interval, a pause, or a vacation day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Clock time, `HH:MM`, 24-hour, local. `00:00` for vacation entries.
    pub start: String,
    pub end: String,
    /// Project label. `"Pause"` and `"Urlaub"` are reserved.
    pub project: String,
    pub activity: String,
    /// Work location: true for remote, false for on-site.
    pub remote: bool,
    /// Decimal hours derived from start/end; fixed for vacation entries.
    /// May be negative when end < start (no midnight rollover).
    pub hours: f64,
    /// Break length in minutes; populated only for pause entries.
    pub pause_minutes: i64,
    pub created_at: i64,
}

/// Caller-supplied fields for creating or editing an entry. Derived fields
/// (`hours`, `pause_minutes`) are computed by the entry service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntry {
    pub date: String,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    #[serde(default)]
    pub project: String,
    #[serde(default)]
    pub activity: String,
    #[serde(default)]
    pub remote: bool,
}

/// Listing filter for the entries view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryFilter {
    pub date: Option<String>,
    pub project: Option<String>,
    /// Newest first when set; the entries view default.
    #[serde(default)]
    pub descending: bool,
}
