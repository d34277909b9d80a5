//! Port interfaces for entry persistence
//!
//! These traits define the boundary between entry business logic and the
//! storage backend.

use async_trait::async_trait;
use zeitlog_domain::{DateRange, Result, TimeEntry};

/// Trait for persisting time entries.
///
/// Implementations must return entries ordered by `(date, start)` ascending
/// so that collision scans and merge walks are deterministic.
#[async_trait]
pub trait EntryRepository: Send + Sync {
    async fn insert(&self, entry: TimeEntry) -> Result<()>;

    async fn update(&self, entry: TimeEntry) -> Result<()>;

    async fn delete(&self, id: &str) -> Result<()>;

    async fn get(&self, id: &str) -> Result<Option<TimeEntry>>;

    /// All entries on one calendar date.
    async fn find_by_date(&self, date: &str) -> Result<Vec<TimeEntry>>;

    /// All entries whose date falls within the inclusive range.
    async fn find_in_range(&self, range: &DateRange) -> Result<Vec<TimeEntry>>;

    async fn find_all(&self) -> Result<Vec<TimeEntry>>;

    /// Relabel every entry of `old` to `new`; returns the number touched.
    async fn rename_project(&self, old: &str, new: &str) -> Result<usize>;
}
