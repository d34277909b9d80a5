//! Port interface for task persistence

use async_trait::async_trait;
use zeitlog_domain::{Result, Task, TaskStatus};

/// Trait for persisting tasks.
///
/// Listing order is creation time descending (newest first), matching the
/// task view.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn insert(&self, task: Task) -> Result<()>;

    async fn update(&self, task: Task) -> Result<()>;

    async fn delete(&self, id: &str) -> Result<()>;

    async fn get(&self, id: &str) -> Result<Option<Task>>;

    async fn list(&self) -> Result<Vec<Task>>;

    async fn set_status(&self, id: &str, status: TaskStatus) -> Result<()>;
}
