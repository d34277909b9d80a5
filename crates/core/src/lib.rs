//! # Zeitlog Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits)
//! - Use cases and services
//!
//! ## Architecture Principles
//! - Only depends on `zeitlog-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits

#[cfg(test)]
pub(crate) mod testing;

pub mod alarm;
pub mod calendar;
pub mod entries;
pub mod projects;
pub mod reporting;
pub mod tasks;
pub mod timer;

// Re-export the port traits and services
pub use alarm::ports::{DeliveryOutcome, PushNotifier, PushTokenRepository};
pub use alarm::{AlarmService, AlarmSweep};
pub use calendar::ports::AppointmentRepository;
pub use calendar::{CalendarService, NewAppointment};
pub use entries::ports::EntryRepository;
pub use entries::EntryService;
pub use projects::ports::ProjectRepository;
pub use projects::ProjectService;
pub use reporting::{ReportingService, TargetComparison};
pub use tasks::ports::TaskRepository;
pub use tasks::{bucket_of, NewTask, TaskService};
pub use timer::ports::TimerRepository;
pub use timer::TimerService;
