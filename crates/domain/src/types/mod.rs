//! Domain types and models

pub mod calendar;
pub mod entry;
pub mod reports;
pub mod task;
pub mod timer;

pub use calendar::{Appointment, AppointmentSource, ImportSummary};
pub use entry::{EntryFilter, NewEntry, TimeEntry};
pub use reports::{DateRange, MergedBlock, Period, PeriodStats, ProjectShare};
pub use task::{Task, TaskBucket, TaskPriority, TaskStatus};
pub use timer::{TimerMode, TimerSnapshot, TimerState};

use serde::{Deserialize, Serialize};

/// Named category for time entries, identified by its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub color: String,
    pub created_at: i64,
}

/// Payload handed to the push-notification collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
    /// Collapse key so repeated alarms replace each other on the device.
    pub tag: String,
}
