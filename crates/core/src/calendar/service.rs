//! Calendar service - appointment CRUD and the import/reset flow

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;
use zeitlog_domain::{
    parse_ics, Appointment, AppointmentSource, ImportSummary, Result, ZeitlogError,
};

use super::ports::AppointmentRepository;

/// Caller-supplied fields for creating or editing an appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAppointment {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub location: String,
    pub start: String,
    #[serde(default)]
    pub end: String,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default)]
    pub description: String,
}

pub struct CalendarService {
    repository: Arc<dyn AppointmentRepository>,
}

impl CalendarService {
    pub fn new(repository: Arc<dyn AppointmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, new: NewAppointment) -> Result<Appointment> {
        let new = validate(new)?;
        let appointment = Appointment {
            id: Uuid::now_v7().to_string(),
            subject: new.subject,
            location: new.location,
            start: new.start,
            end: new.end,
            all_day: new.all_day,
            description: new.description,
            source: AppointmentSource::Manual,
            created_at: Utc::now().timestamp(),
        };
        self.repository.insert(appointment.clone()).await?;
        info!(appointment_id = %appointment.id, "appointment created");
        Ok(appointment)
    }

    pub async fn update(&self, id: &str, new: NewAppointment) -> Result<Appointment> {
        let existing = self.get(id).await?;
        let new = validate(new)?;
        let appointment = Appointment {
            id: existing.id,
            subject: new.subject,
            location: new.location,
            start: new.start,
            end: new.end,
            all_day: new.all_day,
            description: new.description,
            source: existing.source,
            created_at: existing.created_at,
        };
        self.repository.update(appointment.clone()).await?;
        Ok(appointment)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.get(id).await?;
        self.repository.delete(id).await?;
        info!(appointment_id = %id, "appointment deleted");
        Ok(())
    }

    pub async fn get(&self, id: &str) -> Result<Appointment> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| ZeitlogError::NotFound(format!("appointment {id}")))
    }

    pub async fn list(&self) -> Result<Vec<Appointment>> {
        self.repository.list().await
    }

    /// Replace the whole calendar with the events in an ICS document.
    ///
    /// Events starting before `today` are dropped. The wipe only happens
    /// with `confirmed` set; the first call without it reports what would
    /// happen as a `Conflict` so the caller can ask the user.
    pub async fn import_reset(
        &self,
        ics_text: &str,
        today: NaiveDate,
        confirmed: bool,
    ) -> Result<ImportSummary> {
        let today_str = today.format("%Y-%m-%d").to_string();
        let now = Utc::now().timestamp();

        let mut skipped_past = 0;
        let mut incoming: Vec<Appointment> = Vec::new();
        for event in parse_ics(ics_text) {
            if event.start.is_empty() {
                warn!(subject = %event.subject, "dropping event without start");
                continue;
            }
            // The start is ISO-like, so the date prefix compares lexically.
            let date_prefix = &event.start[..event.start.len().min(10)];
            if date_prefix < today_str.as_str() {
                skipped_past += 1;
                continue;
            }
            incoming.push(Appointment {
                id: Uuid::now_v7().to_string(),
                subject: event.subject,
                location: event.location,
                start: event.start,
                end: event.end,
                all_day: event.all_day,
                description: event.description,
                source: AppointmentSource::Imported,
                created_at: now,
            });
        }

        if incoming.is_empty() {
            return Err(ZeitlogError::InvalidInput(
                "no upcoming events found in the calendar file".to_string(),
            ));
        }
        if !confirmed {
            return Err(ZeitlogError::Conflict(format!(
                "import will replace all appointments with {} events, confirmation required",
                incoming.len()
            )));
        }

        let deleted = self.repository.delete_all().await?;
        let imported = incoming.len();
        self.repository.insert_batch(incoming).await?;
        info!(deleted, imported, skipped_past, "calendar import completed");
        Ok(ImportSummary { deleted, imported, skipped_past })
    }
}

fn validate(mut new: NewAppointment) -> Result<NewAppointment> {
    new.subject = new.subject.trim().to_string();
    if new.subject.is_empty() {
        return Err(ZeitlogError::InvalidInput("subject is required".to_string()));
    }
    if new.start.is_empty() {
        return Err(ZeitlogError::InvalidInput("start is required".to_string()));
    }
    Ok(new)
}
