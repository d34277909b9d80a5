//! Project service - catalogue maintenance and rename cascades

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use zeitlog_domain::constants::{PAUSE_PROJECT, VACATION_PROJECT};
use zeitlog_domain::{Project, Result, ZeitlogError};

use super::ports::ProjectRepository;
use crate::entries::ports::EntryRepository;

const DEFAULT_COLOR: &str = "#4a90d9";

pub struct ProjectService {
    repository: Arc<dyn ProjectRepository>,
    entries: Arc<dyn EntryRepository>,
}

impl ProjectService {
    pub fn new(repository: Arc<dyn ProjectRepository>, entries: Arc<dyn EntryRepository>) -> Self {
        Self { repository, entries }
    }

    pub async fn create(&self, name: &str, color: Option<String>) -> Result<Project> {
        let name = validate_name(name)?;
        if self.repository.get(&name).await?.is_some() {
            return Err(ZeitlogError::Conflict(format!("project '{name}' already exists")));
        }

        let project = Project {
            name: name.clone(),
            color: color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            created_at: Utc::now().timestamp(),
        };
        self.repository.upsert(project.clone()).await?;
        info!(project = %name, "project created");
        Ok(project)
    }

    /// Rename a project and relabel every entry that references it.
    pub async fn rename(&self, old: &str, new: &str) -> Result<Project> {
        let new = validate_name(new)?;
        let existing = self
            .repository
            .get(old)
            .await?
            .ok_or_else(|| ZeitlogError::NotFound(format!("project '{old}'")))?;
        if new != old && self.repository.get(&new).await?.is_some() {
            return Err(ZeitlogError::Conflict(format!("project '{new}' already exists")));
        }

        let renamed =
            Project { name: new.clone(), color: existing.color, created_at: existing.created_at };
        self.repository.upsert(renamed.clone()).await?;
        if new != old {
            self.repository.delete(old).await?;
        }
        let cascaded = self.entries.rename_project(old, &new).await?;
        info!(old = %old, new = %new, cascaded, "project renamed");
        Ok(renamed)
    }

    pub async fn delete(&self, name: &str) -> Result<()> {
        self.repository
            .get(name)
            .await?
            .ok_or_else(|| ZeitlogError::NotFound(format!("project '{name}'")))?;
        self.repository.delete(name).await?;
        info!(project = %name, "project deleted");
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<Project>> {
        self.repository.list().await
    }
}

/// Trim and validate a caller-supplied project name.
fn validate_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ZeitlogError::InvalidInput("project name is required".to_string()));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(ZeitlogError::InvalidInput(
            "project name must not contain path separators".to_string(),
        ));
    }
    if name.eq_ignore_ascii_case(PAUSE_PROJECT) || name.eq_ignore_ascii_case(VACATION_PROJECT) {
        return Err(ZeitlogError::InvalidInput(format!("'{name}' is a reserved project name")));
    }
    Ok(name.to_string())
}
