//! Port interface for project persistence

use async_trait::async_trait;
use zeitlog_domain::{Project, Result};

/// Trait for persisting projects. Projects are identified by name.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn upsert(&self, project: Project) -> Result<()>;

    async fn delete(&self, name: &str) -> Result<()>;

    async fn get(&self, name: &str) -> Result<Option<Project>>;

    /// All projects ordered by name.
    async fn list(&self) -> Result<Vec<Project>>;
}
