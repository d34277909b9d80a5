//! SQLite persistence: pool management and repository adapters

mod appointment_repository;
mod entry_repository;
mod manager;
mod project_repository;
mod push_token_repository;
mod task_repository;
mod timer_repository;

pub use appointment_repository::SqliteAppointmentRepository;
pub use entry_repository::SqliteEntryRepository;
pub use manager::DbManager;
pub use project_repository::SqliteProjectRepository;
pub use push_token_repository::SqlitePushTokenRepository;
pub use task_repository::SqliteTaskRepository;
pub use timer_repository::SqliteTimerRepository;
