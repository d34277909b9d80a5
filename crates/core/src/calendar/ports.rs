//! Port interface for appointment persistence

use async_trait::async_trait;
use zeitlog_domain::{Appointment, Result};

/// Trait for persisting appointments, ordered by start timestamp.
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn insert(&self, appointment: Appointment) -> Result<()>;

    /// Insert a whole import in one go.
    async fn insert_batch(&self, appointments: Vec<Appointment>) -> Result<()>;

    async fn update(&self, appointment: Appointment) -> Result<()>;

    async fn delete(&self, id: &str) -> Result<()>;

    async fn get(&self, id: &str) -> Result<Option<Appointment>>;

    async fn list(&self) -> Result<Vec<Appointment>>;

    /// Wipe the table; returns how many rows were removed.
    async fn delete_all(&self) -> Result<usize>;
}
