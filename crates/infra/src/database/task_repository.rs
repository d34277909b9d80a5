//! SQLite-backed implementation of the TaskRepository port.

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::types::Type;
use rusqlite::{params, Row};
use zeitlog_core::tasks::ports::TaskRepository;
use zeitlog_domain::{Result, Task, TaskPriority, TaskStatus};

use super::manager::SqlitePool;
use crate::errors::InfraError;

pub struct SqliteTaskRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteTaskRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

fn map_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    let priority: String = row.get(3)?;
    let status: String = row.get(5)?;
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        due_date: row.get(2)?,
        priority: TaskPriority::parse(&priority).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(3, Type::Text, priority.clone().into())
        })?,
        notes: row.get(4)?,
        status: TaskStatus::parse(&status).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(5, Type::Text, status.clone().into())
        })?,
        created_at: row.get(6)?,
    })
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn insert(&self, task: Task) -> Result<()> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        conn.execute(
            "INSERT INTO tasks (id, title, due_date, priority, notes, status, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                task.id,
                task.title,
                task.due_date,
                task.priority.as_str(),
                task.notes,
                task.status.as_str(),
                task.created_at,
            ],
        )
        .map_err(InfraError::from)?;
        Ok(())
    }

    async fn update(&self, task: Task) -> Result<()> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        conn.execute(
            "UPDATE tasks
             SET title = ?2, due_date = ?3, priority = ?4, notes = ?5, status = ?6
             WHERE id = ?1",
            params![
                task.id,
                task.title,
                task.due_date,
                task.priority.as_str(),
                task.notes,
                task.status.as_str(),
            ],
        )
        .map_err(InfraError::from)?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        conn.execute("DELETE FROM tasks WHERE id = ?1", params![id]).map_err(InfraError::from)?;
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Task>> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        let result = conn
            .query_row(
                "SELECT id, title, due_date, priority, notes, status, created_at
                 FROM tasks WHERE id = ?1",
                params![id],
                map_task,
            )
            .map(Some)
            .or_else(|err| match err {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                other => Err(InfraError::from(other)),
            })?;
        Ok(result)
    }

    async fn list(&self) -> Result<Vec<Task>> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        let mut stmt = conn
            .prepare(
                "SELECT id, title, due_date, priority, notes, status, created_at
                 FROM tasks ORDER BY created_at DESC, id DESC",
            )
            .map_err(InfraError::from)?;
        let tasks = stmt
            .query_map(params![], map_task)
            .map_err(InfraError::from)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(InfraError::from)?;
        Ok(tasks)
    }

    async fn set_status(&self, id: &str, status: TaskStatus) -> Result<()> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        conn.execute(
            "UPDATE tasks SET status = ?2 WHERE id = ?1",
            params![id, status.as_str()],
        )
        .map_err(InfraError::from)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::database::DbManager;

    fn repository() -> (SqliteTaskRepository, TempDir) {
        let temp_dir = TempDir::new().expect("temp dir created");
        let manager =
            DbManager::new(temp_dir.path().join("test.db"), 2).expect("manager created");
        manager.run_migrations().expect("migrations run");
        (SqliteTaskRepository::new(manager.pool().clone()), temp_dir)
    }

    fn task(id: &str, title: &str, created_at: i64) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            due_date: Some("2024-03-10".to_string()),
            priority: TaskPriority::High,
            notes: "check numbers".to_string(),
            status: TaskStatus::Open,
            created_at,
        }
    }

    #[tokio::test]
    async fn round_trips_enums_as_text() {
        let (repo, _guard) = repository();
        let stored = task("t1", "report", 10);
        repo.insert(stored.clone()).await.unwrap();

        let loaded = repo.get("t1").await.unwrap().unwrap();
        assert_eq!(loaded, stored);
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let (repo, _guard) = repository();
        repo.insert(task("t1", "old", 10)).await.unwrap();
        repo.insert(task("t2", "new", 20)).await.unwrap();

        let listed = repo.list().await.unwrap();
        assert_eq!(listed[0].id, "t2");
    }

    #[tokio::test]
    async fn set_status_flips_one_row() {
        let (repo, _guard) = repository();
        repo.insert(task("t1", "a", 10)).await.unwrap();
        repo.insert(task("t2", "b", 20)).await.unwrap();

        repo.set_status("t1", TaskStatus::Done).await.unwrap();
        assert_eq!(repo.get("t1").await.unwrap().unwrap().status, TaskStatus::Done);
        assert_eq!(repo.get("t2").await.unwrap().unwrap().status, TaskStatus::Open);
    }
}
