//! Reporting types: periods, aggregated statistics, merged blocks

use serde::{Deserialize, Serialize};

use crate::constants::{RANGE_MAX_SENTINEL, RANGE_MIN_SENTINEL};

/// Named period used to filter entries for dashboards and exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Today,
    Week,
    Month,
    Year,
    All,
    Custom,
}

/// Inclusive date bounds, compared lexically as zero-padded ISO strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    /// The unbounded sentinel range used for `Period::All`.
    pub fn unbounded() -> Self {
        Self { start: RANGE_MIN_SENTINEL.to_string(), end: RANGE_MAX_SENTINEL.to_string() }
    }

    /// True when `date` falls within the inclusive bounds.
    pub fn contains(&self, date: &str) -> bool {
        date >= self.start.as_str() && date <= self.end.as_str()
    }
}

/// Hour share of one project within a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectShare {
    pub project: String,
    pub hours: f64,
    /// Percent of the period's working hours.
    pub percent: f64,
}

/// Aggregated statistics over a filtered entry set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodStats {
    pub range: DateRange,
    /// Working hours; pause entries are excluded unless pause itself is the
    /// project filter.
    pub total_hours: f64,
    pub entry_count: usize,
    /// Distinct dates with qualifying entries.
    pub active_days: usize,
    pub avg_hours_per_day: f64,
    pub remote_hours: f64,
    pub onsite_hours: f64,
    pub remote_percent: f64,
    pub onsite_percent: f64,
    /// Per-project hour sums, descending by hours.
    pub projects: Vec<ProjectShare>,
}

/// One printable report row produced by coalescing back-to-back entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedBlock {
    pub date: String,
    pub start: String,
    pub end: String,
    pub hours: f64,
    pub is_pause: bool,
    /// How many original entries the block covers.
    pub entry_count: usize,
    /// Distinct contributing project labels, insertion order preserved.
    pub projects: Vec<String>,
    /// Distinct contributing activity descriptions, insertion order preserved.
    pub activities: Vec<String>,
}
