//! SQLite-backed implementation of the AppointmentRepository port.

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::types::Type;
use rusqlite::{params, Row};
use tracing::instrument;
use zeitlog_core::calendar::ports::AppointmentRepository;
use zeitlog_domain::{Appointment, AppointmentSource, Result};

use super::manager::SqlitePool;
use crate::errors::InfraError;

const SELECT_COLUMNS: &str =
    "id, subject, location, start_at, end_at, all_day, description, source, created_at";

pub struct SqliteAppointmentRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteAppointmentRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

fn map_appointment(row: &Row<'_>) -> rusqlite::Result<Appointment> {
    let source: String = row.get(7)?;
    Ok(Appointment {
        id: row.get(0)?,
        subject: row.get(1)?,
        location: row.get(2)?,
        start: row.get(3)?,
        end: row.get(4)?,
        all_day: row.get(5)?,
        description: row.get(6)?,
        source: AppointmentSource::parse(&source).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(7, Type::Text, source.clone().into())
        })?,
        created_at: row.get(8)?,
    })
}

fn insert_row(conn: &rusqlite::Connection, appointment: &Appointment) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO appointments (id, subject, location, start_at, end_at, all_day,
                                   description, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            appointment.id,
            appointment.subject,
            appointment.location,
            appointment.start,
            appointment.end,
            appointment.all_day,
            appointment.description,
            appointment.source.as_str(),
            appointment.created_at,
        ],
    )?;
    Ok(())
}

#[async_trait]
impl AppointmentRepository for SqliteAppointmentRepository {
    async fn insert(&self, appointment: Appointment) -> Result<()> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        insert_row(&conn, &appointment).map_err(InfraError::from)?;
        Ok(())
    }

    /// Inserts the whole batch inside one transaction.
    #[instrument(skip(self, appointments), fields(count = appointments.len()))]
    async fn insert_batch(&self, appointments: Vec<Appointment>) -> Result<()> {
        let mut conn = self.pool.get().map_err(InfraError::from)?;
        let tx = conn.transaction().map_err(InfraError::from)?;
        for appointment in &appointments {
            insert_row(&tx, appointment).map_err(InfraError::from)?;
        }
        tx.commit().map_err(InfraError::from)?;
        Ok(())
    }

    async fn update(&self, appointment: Appointment) -> Result<()> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        conn.execute(
            "UPDATE appointments
             SET subject = ?2, location = ?3, start_at = ?4, end_at = ?5, all_day = ?6,
                 description = ?7, source = ?8
             WHERE id = ?1",
            params![
                appointment.id,
                appointment.subject,
                appointment.location,
                appointment.start,
                appointment.end,
                appointment.all_day,
                appointment.description,
                appointment.source.as_str(),
            ],
        )
        .map_err(InfraError::from)?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        conn.execute("DELETE FROM appointments WHERE id = ?1", params![id])
            .map_err(InfraError::from)?;
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Appointment>> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        let result = conn
            .query_row(
                &format!("SELECT {SELECT_COLUMNS} FROM appointments WHERE id = ?1"),
                params![id],
                map_appointment,
            )
            .map(Some)
            .or_else(|err| match err {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                other => Err(InfraError::from(other)),
            })?;
        Ok(result)
    }

    async fn list(&self) -> Result<Vec<Appointment>> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {SELECT_COLUMNS} FROM appointments ORDER BY start_at"
            ))
            .map_err(InfraError::from)?;
        let appointments = stmt
            .query_map(params![], map_appointment)
            .map_err(InfraError::from)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(InfraError::from)?;
        Ok(appointments)
    }

    async fn delete_all(&self) -> Result<usize> {
        let conn = self.pool.get().map_err(InfraError::from)?;
        let deleted =
            conn.execute("DELETE FROM appointments", params![]).map_err(InfraError::from)?;
        Ok(deleted)
    }
}
