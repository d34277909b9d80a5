//! Cron-driven background jobs

mod alarm_scheduler;
mod error;

pub use alarm_scheduler::{AlarmScheduler, AlarmSchedulerConfig};
pub use error::{SchedulerError, SchedulerResult};
