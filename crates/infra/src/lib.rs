//! # Zeitlog Infra
//!
//! Infrastructure adapters behind the core ports:
//! - SQLite persistence (rusqlite + r2d2 pool)
//! - HTTP push delivery (reqwest)
//! - Cron-driven alarm sweeps (tokio-cron-scheduler)
//! - Configuration loading (env + file probing)
//! - CSV export sink

pub mod config;
pub mod database;
pub mod errors;
pub mod export;
pub mod push;
pub mod scheduling;

pub use config::load_config;
pub use database::{
    DbManager, SqliteAppointmentRepository, SqliteEntryRepository, SqlitePushTokenRepository,
    SqliteProjectRepository, SqliteTaskRepository, SqliteTimerRepository,
};
pub use errors::InfraError;
pub use push::HttpPushNotifier;
pub use scheduling::{AlarmScheduler, AlarmSchedulerConfig, SchedulerError};
