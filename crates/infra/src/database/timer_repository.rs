//! SQLite-backed implementation of the TimerRepository port.
//!
//! The table holds at most one row (id = 1); `save` replaces it, which is
//! the last-write-wins contract of the durable timer mirror.

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::types::Type;
use rusqlite::{params, Row};
use tracing::instrument;
use zeitlog_core::timer::ports::TimerRepository;
use zeitlog_domain::{Result, TimerMode, TimerState};

use super::manager::SqlitePool;
use crate::errors::InfraError;

const SELECT_COLUMNS: &str = "start_ts, mode, countdown_minutes, project, activity, remote,
       active, alarm_ts, notified_at";

pub struct SqliteTimerRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteTimerRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

fn map_state(row: &Row<'_>) -> rusqlite::Result<TimerState> {
    let mode: String = row.get(1)?;
    let minutes: Option<i64> = row.get(2)?;
    let mode = match (mode.as_str(), minutes) {
        ("countdown", Some(minutes)) => TimerMode::Countdown { minutes },
        ("stopwatch", _) => TimerMode::Stopwatch,
        _ => {
            return Err(rusqlite::Error::FromSqlConversionFailure(1, Type::Text, mode.into()));
        }
    };
    Ok(TimerState {
        start_ts: row.get(0)?,
        mode,
        project: row.get(3)?,
        activity: row.get(4)?,
        remote: row.get(5)?,
        active: row.get(6)?,
        alarm_ts: row.get(7)?,
        notified_at: row.get(8)?,
    })
}

#[async_trait]
impl TimerRepository for SqliteTimerRepository {
    #[instrument(skip(self, state), fields(project = %state.project))]
    async fn save(&self, state: TimerState) -> Result<()> {
        let (mode, minutes) = match state.mode {
            TimerMode::Countdown { minutes } => ("countdown", Some(minutes)),
            TimerMode::Stopwatch => ("stopwatch", None),
        };
        let conn = self.pool.get().map_err(InfraError::from)?;
        conn.execute(
            "INSERT OR REPLACE INTO timer_state
                 (id, start_ts, mode, countdown_minutes, project, activity, remote,
                  active, alarm_ts, notified_at)
             VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                state.start_ts,
                mode,
                minutes,
                state.project,
                state.activity,
                state.remote,
                state.active,
                state.alarm_ts,
                state.notified_at,
            ],
        )
        .map_err(InfraError::from)?;
        Ok(())
    }

    async fn clear_active(&self) -> Result<()> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        conn.execute("DELETE FROM timer_state WHERE id = 1", params![])
            .map_err(InfraError::from)?;
        Ok(())
    }

    async fn current(&self) -> Result<Option<TimerState>> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        let result = conn
            .query_row(
                &format!("SELECT {SELECT_COLUMNS} FROM timer_state WHERE id = 1 AND active = 1"),
                params![],
                map_state,
            )
            .map(Some)
            .or_else(|err| match err {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                other => Err(InfraError::from(other)),
            })?;
        Ok(result)
    }

    async fn find_expired(&self, now_ts: i64) -> Result<Option<TimerState>> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        let result = conn
            .query_row(
                &format!(
                    "SELECT {SELECT_COLUMNS} FROM timer_state
                     WHERE id = 1 AND active = 1 AND notified_at IS NULL
                       AND alarm_ts IS NOT NULL AND alarm_ts <= ?1"
                ),
                params![now_ts],
                map_state,
            )
            .map(Some)
            .or_else(|err| match err {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                other => Err(InfraError::from(other)),
            })?;
        Ok(result)
    }

    async fn mark_notified(&self, ts: i64) -> Result<()> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        conn.execute("UPDATE timer_state SET notified_at = ?1 WHERE id = 1", params![ts])
            .map_err(InfraError::from)?;
        Ok(())
    }
}
