//! SQLite-backed implementation of the PushTokenRepository port.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::params;
use zeitlog_core::alarm::ports::PushTokenRepository;
use zeitlog_domain::Result;

use super::manager::SqlitePool;
use crate::errors::InfraError;

pub struct SqlitePushTokenRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePushTokenRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PushTokenRepository for SqlitePushTokenRepository {
    async fn register(&self, token: &str) -> Result<()> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        conn.execute(
            "INSERT OR IGNORE INTO push_tokens (token, registered_at) VALUES (?1, ?2)",
            params![token, Utc::now().timestamp()],
        )
        .map_err(InfraError::from)?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<String>> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        let mut stmt = conn
            .prepare("SELECT token FROM push_tokens ORDER BY registered_at, token")
            .map_err(InfraError::from)?;
        let tokens = stmt
            .query_map(params![], |row| row.get(0))
            .map_err(InfraError::from)?
            .collect::<rusqlite::Result<Vec<String>>>()
            .map_err(InfraError::from)?;
        Ok(tokens)
    }

    async fn remove(&self, token: &str) -> Result<()> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        conn.execute("DELETE FROM push_tokens WHERE token = ?1", params![token])
            .map_err(InfraError::from)?;
        Ok(())
    }
}
