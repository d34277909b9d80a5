//! SQLite-backed implementation of the EntryRepository port.

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::{params, Row};
use tracing::{debug, instrument};
use zeitlog_core::entries::ports::EntryRepository;
use zeitlog_domain::{DateRange, Result, TimeEntry};

use super::manager::SqlitePool;
use crate::errors::InfraError;

const SELECT_COLUMNS: &str = "id, date, start_time, end_time, project, activity, remote, hours,
       pause_minutes, created_at";

pub struct SqliteEntryRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteEntryRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

fn map_entry(row: &Row<'_>) -> rusqlite::Result<TimeEntry> {
    Ok(TimeEntry {
        id: row.get(0)?,
        date: row.get(1)?,
        start: row.get(2)?,
        end: row.get(3)?,
        project: row.get(4)?,
        activity: row.get(5)?,
        remote: row.get(6)?,
        hours: row.get(7)?,
        pause_minutes: row.get(8)?,
        created_at: row.get(9)?,
    })
}

#[async_trait]
impl EntryRepository for SqliteEntryRepository {
    #[instrument(skip(self, entry), fields(entry_id = %entry.id))]
    async fn insert(&self, entry: TimeEntry) -> Result<()> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        conn.execute(
            "INSERT INTO entries (id, date, start_time, end_time, project, activity, remote,
                                  hours, pause_minutes, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                entry.id,
                entry.date,
                entry.start,
                entry.end,
                entry.project,
                entry.activity,
                entry.remote,
                entry.hours,
                entry.pause_minutes,
                entry.created_at,
            ],
        )
        .map_err(InfraError::from)?;
        Ok(())
    }

    #[instrument(skip(self, entry), fields(entry_id = %entry.id))]
    async fn update(&self, entry: TimeEntry) -> Result<()> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        conn.execute(
            "UPDATE entries
             SET date = ?2, start_time = ?3, end_time = ?4, project = ?5, activity = ?6,
                 remote = ?7, hours = ?8, pause_minutes = ?9
             WHERE id = ?1",
            params![
                entry.id,
                entry.date,
                entry.start,
                entry.end,
                entry.project,
                entry.activity,
                entry.remote,
                entry.hours,
                entry.pause_minutes,
            ],
        )
        .map_err(InfraError::from)?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        conn.execute("DELETE FROM entries WHERE id = ?1", params![id])
            .map_err(InfraError::from)?;
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<TimeEntry>> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        let result = conn
            .query_row(
                &format!("SELECT {SELECT_COLUMNS} FROM entries WHERE id = ?1"),
                params![id],
                map_entry,
            )
            .map(Some)
            .or_else(|err| match err {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                other => Err(InfraError::from(other)),
            })?;
        Ok(result)
    }

    async fn find_by_date(&self, date: &str) -> Result<Vec<TimeEntry>> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {SELECT_COLUMNS} FROM entries
                 WHERE date = ?1
                 ORDER BY date, start_time"
            ))
            .map_err(InfraError::from)?;
        let entries = stmt
            .query_map(params![date], map_entry)
            .map_err(InfraError::from)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(InfraError::from)?;
        Ok(entries)
    }

    async fn find_in_range(&self, range: &DateRange) -> Result<Vec<TimeEntry>> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        // Zero-padded ISO dates compare lexically, including the sentinels.
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {SELECT_COLUMNS} FROM entries
                 WHERE date >= ?1 AND date <= ?2
                 ORDER BY date, start_time"
            ))
            .map_err(InfraError::from)?;
        let entries = stmt
            .query_map(params![range.start, range.end], map_entry)
            .map_err(InfraError::from)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(InfraError::from)?;
        debug!(start = %range.start, end = %range.end, count = entries.len(), "range scan");
        Ok(entries)
    }

    async fn find_all(&self) -> Result<Vec<TimeEntry>> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {SELECT_COLUMNS} FROM entries ORDER BY date, start_time"
            ))
            .map_err(InfraError::from)?;
        let entries = stmt
            .query_map(params![], map_entry)
            .map_err(InfraError::from)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(InfraError::from)?;
        Ok(entries)
    }

    #[instrument(skip(self))]
    async fn rename_project(&self, old: &str, new: &str) -> Result<usize> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        let touched = conn
            .execute("UPDATE entries SET project = ?2 WHERE project = ?1", params![old, new])
            .map_err(InfraError::from)?;
        Ok(touched)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use zeitlog_domain::DateRange;

    use super::*;
    use crate::database::DbManager;

    fn repository() -> (SqliteEntryRepository, TempDir) {
        let temp_dir = TempDir::new().expect("temp dir created");
        let manager =
            DbManager::new(temp_dir.path().join("test.db"), 2).expect("manager created");
        manager.run_migrations().expect("migrations run");
        (SqliteEntryRepository::new(manager.pool().clone()), temp_dir)
    }

    fn entry(id: &str, date: &str, start: &str, project: &str) -> TimeEntry {
        TimeEntry {
            id: id.to_string(),
            date: date.to_string(),
            start: start.to_string(),
            end: "17:00".to_string(),
            project: project.to_string(),
            activity: "dev".to_string(),
            remote: true,
            hours: 8.0,
            pause_minutes: 0,
            created_at: 1,
        }
    }

    #[tokio::test]
    async fn round_trips_an_entry() {
        let (repo, _guard) = repository();
        let stored = entry("e1", "2024-03-01", "09:00", "Alpha");
        repo.insert(stored.clone()).await.unwrap();

        let loaded = repo.get("e1").await.unwrap().unwrap();
        assert_eq!(loaded, stored);
        assert!(repo.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_id_is_a_conflict() {
        let (repo, _guard) = repository();
        repo.insert(entry("e1", "2024-03-01", "09:00", "Alpha")).await.unwrap();
        let err = repo.insert(entry("e1", "2024-03-02", "10:00", "Beta")).await.unwrap_err();
        assert!(matches!(err, zeitlog_domain::ZeitlogError::Conflict(_)));
    }

    #[tokio::test]
    async fn range_scan_is_ordered_and_inclusive() {
        let (repo, _guard) = repository();
        repo.insert(entry("e2", "2024-03-02", "09:00", "Alpha")).await.unwrap();
        repo.insert(entry("e1", "2024-03-01", "13:00", "Alpha")).await.unwrap();
        repo.insert(entry("e0", "2024-03-01", "09:00", "Alpha")).await.unwrap();
        repo.insert(entry("e3", "2024-04-01", "09:00", "Alpha")).await.unwrap();

        let range = DateRange { start: "2024-03-01".into(), end: "2024-03-31".into() };
        let found = repo.find_in_range(&range).await.unwrap();
        let ids: Vec<&str> = found.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e0", "e1", "e2"]);

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 4);
    }

    #[tokio::test]
    async fn sentinel_range_reaches_everything() {
        let (repo, _guard) = repository();
        repo.insert(entry("e1", "2024-03-01", "09:00", "Alpha")).await.unwrap();
        let found = repo.find_in_range(&DateRange::unbounded()).await.unwrap();
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn rename_project_touches_matching_rows_only() {
        let (repo, _guard) = repository();
        repo.insert(entry("e1", "2024-03-01", "09:00", "Alpha")).await.unwrap();
        repo.insert(entry("e2", "2024-03-02", "09:00", "Beta")).await.unwrap();

        let touched = repo.rename_project("Alpha", "Gamma").await.unwrap();
        assert_eq!(touched, 1);
        assert_eq!(repo.get("e1").await.unwrap().unwrap().project, "Gamma");
        assert_eq!(repo.get("e2").await.unwrap().unwrap().project, "Beta");
    }

    #[tokio::test]
    async fn update_and_delete() {
        let (repo, _guard) = repository();
        let mut stored = entry("e1", "2024-03-01", "09:00", "Alpha");
        repo.insert(stored.clone()).await.unwrap();

        stored.end = "18:00".to_string();
        stored.hours = 9.0;
        repo.update(stored.clone()).await.unwrap();
        assert_eq!(repo.get("e1").await.unwrap().unwrap().hours, 9.0);

        repo.delete("e1").await.unwrap();
        assert!(repo.get("e1").await.unwrap().is_none());
    }
}
