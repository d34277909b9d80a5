//! SQLite-backed implementation of the ProjectRepository port.

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::{params, Row};
use zeitlog_core::projects::ports::ProjectRepository;
use zeitlog_domain::{Project, Result};

use super::manager::SqlitePool;
use crate::errors::InfraError;

pub struct SqliteProjectRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteProjectRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

fn map_project(row: &Row<'_>) -> rusqlite::Result<Project> {
    Ok(Project { name: row.get(0)?, color: row.get(1)?, created_at: row.get(2)? })
}

#[async_trait]
impl ProjectRepository for SqliteProjectRepository {
    async fn upsert(&self, project: Project) -> Result<()> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        conn.execute(
            "INSERT INTO projects (name, color, created_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(name) DO UPDATE SET color = excluded.color",
            params![project.name, project.color, project.created_at],
        )
        .map_err(InfraError::from)?;
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<()> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        conn.execute("DELETE FROM projects WHERE name = ?1", params![name])
            .map_err(InfraError::from)?;
        Ok(())
    }

    async fn get(&self, name: &str) -> Result<Option<Project>> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        let result = conn
            .query_row(
                "SELECT name, color, created_at FROM projects WHERE name = ?1",
                params![name],
                map_project,
            )
            .map(Some)
            .or_else(|err| match err {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                other => Err(InfraError::from(other)),
            })?;
        Ok(result)
    }

    async fn list(&self) -> Result<Vec<Project>> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        let mut stmt = conn
            .prepare("SELECT name, color, created_at FROM projects ORDER BY name")
            .map_err(InfraError::from)?;
        let projects = stmt
            .query_map(params![], map_project)
            .map_err(InfraError::from)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(InfraError::from)?;
        Ok(projects)
    }
}
