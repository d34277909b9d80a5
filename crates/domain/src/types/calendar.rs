//! Calendar appointment types

use serde::{Deserialize, Serialize};

/// A calendar appointment, created manually or via bulk import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub subject: String,
    pub location: String,
    /// Local ISO-like timestamp, `YYYY-MM-DDTHH:MM:SS`. All-day events are
    /// normalised to midnight.
    pub start: String,
    pub end: String,
    pub all_day: bool,
    pub description: String,
    pub source: AppointmentSource,
    pub created_at: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentSource {
    Manual,
    Imported,
}

impl AppointmentSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Imported => "imported",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "manual" => Some(Self::Manual),
            "imported" => Some(Self::Imported),
            _ => None,
        }
    }
}

/// Outcome of a destructive import/reset run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    /// Appointments removed before the import.
    pub deleted: usize,
    /// Parsed events actually inserted.
    pub imported: usize,
    /// Parsed events dropped because they lie in the past.
    pub skipped_past: usize,
}
