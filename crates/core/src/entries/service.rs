//! Entry service - create, edit, delete and list time entries

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info};
use uuid::Uuid;
use zeitlog_domain::constants::{is_pause_project, is_vacation_project, DEFAULT_VACATION_HOURS};
use zeitlog_domain::utils::time::{hours_between, minutes_of};
use zeitlog_domain::{EntryFilter, NewEntry, Result, TimeEntry, ZeitlogError};

use super::ports::EntryRepository;
use super::rules;

/// Entry lifecycle service.
///
/// Owns the placement rules: a date holds either one vacation entry or any
/// number of non-overlapping work/pause intervals. Collisions are surfaced
/// as `Conflict` so the caller can confirm and retry with the override
/// flag set.
pub struct EntryService {
    repository: Arc<dyn EntryRepository>,
    vacation_hours: f64,
}

impl EntryService {
    pub fn new(repository: Arc<dyn EntryRepository>) -> Self {
        Self { repository, vacation_hours: DEFAULT_VACATION_HOURS }
    }

    /// Override the hours credited for a vacation day.
    pub fn with_vacation_hours(mut self, hours: f64) -> Self {
        self.vacation_hours = hours;
        self
    }

    pub async fn create(&self, new: NewEntry, override_collision: bool) -> Result<TimeEntry> {
        let mut entry = self.build(new)?;
        entry.id = Uuid::now_v7().to_string();
        entry.created_at = Utc::now().timestamp();

        self.check_placement(&entry, None, override_collision).await?;
        self.repository.insert(entry.clone()).await?;
        info!(entry_id = %entry.id, date = %entry.date, project = %entry.project, "entry created");
        Ok(entry)
    }

    pub async fn update(
        &self,
        id: &str,
        new: NewEntry,
        override_collision: bool,
    ) -> Result<TimeEntry> {
        let existing = self.get(id).await?;

        let mut entry = self.build(new)?;
        entry.id = existing.id;
        entry.created_at = existing.created_at;

        let own_id = entry.id.clone();
        self.check_placement(&entry, Some(&own_id), override_collision).await?;
        self.repository.update(entry.clone()).await?;
        debug!(entry_id = %entry.id, "entry updated");
        Ok(entry)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        // Surface a NotFound instead of silently deleting nothing.
        self.get(id).await?;
        self.repository.delete(id).await?;
        info!(entry_id = %id, "entry deleted");
        Ok(())
    }

    pub async fn get(&self, id: &str) -> Result<TimeEntry> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| ZeitlogError::NotFound(format!("entry {id}")))
    }

    /// List entries, optionally narrowed to one date and/or one project.
    pub async fn list(&self, filter: EntryFilter) -> Result<Vec<TimeEntry>> {
        let mut entries = match &filter.date {
            Some(date) => self.repository.find_by_date(date).await?,
            None => self.repository.find_all().await?,
        };
        if let Some(project) = &filter.project {
            entries.retain(|e| &e.project == project);
        }
        if filter.descending {
            entries.reverse();
        }
        Ok(entries)
    }

    /// Validate caller input and derive the stored fields.
    fn build(&self, new: NewEntry) -> Result<TimeEntry> {
        if NaiveDate::parse_from_str(&new.date, "%Y-%m-%d").is_err() {
            return Err(ZeitlogError::InvalidInput(format!("invalid date '{}'", new.date)));
        }
        let project = new.project.trim().to_string();
        if project.is_empty() {
            return Err(ZeitlogError::InvalidInput("project is required".to_string()));
        }

        if is_vacation_project(&project) {
            // Vacation days carry no clock interval; hours are fixed.
            return Ok(TimeEntry {
                id: String::new(),
                date: new.date,
                start: "00:00".to_string(),
                end: "00:00".to_string(),
                project,
                activity: new.activity,
                remote: false,
                hours: self.vacation_hours,
                pause_minutes: 0,
                created_at: 0,
            });
        }

        if new.start.is_empty() || new.end.is_empty() {
            return Err(ZeitlogError::InvalidInput(
                "start and end times are required".to_string(),
            ));
        }
        let hours = hours_between(&new.start, &new.end)?;
        let pause_minutes = if is_pause_project(&project) {
            (minutes_of(&new.end)? - minutes_of(&new.start)?).max(0)
        } else {
            0
        };

        Ok(TimeEntry {
            id: String::new(),
            date: new.date,
            start: new.start,
            end: new.end,
            project,
            activity: new.activity,
            remote: new.remote,
            hours,
            pause_minutes,
            created_at: 0,
        })
    }

    /// Run vacation exclusivity and collision checks against the target date.
    async fn check_placement(
        &self,
        entry: &TimeEntry,
        exclude_id: Option<&str>,
        override_collision: bool,
    ) -> Result<()> {
        let day = self.repository.find_by_date(&entry.date).await?;
        let new_is_vacation = is_vacation_project(&entry.project);

        if let Some(blocker) = rules::vacation_conflict(&day, new_is_vacation, exclude_id) {
            let message = if new_is_vacation {
                format!("date {} already has entries, vacation must stand alone", entry.date)
            } else {
                format!("date {} is a vacation day ({})", entry.date, blocker.project)
            };
            return Err(ZeitlogError::Conflict(message));
        }

        if new_is_vacation || override_collision {
            return Ok(());
        }
        if let Some(hit) = rules::find_overlap(&day, &entry.start, &entry.end, exclude_id)? {
            return Err(ZeitlogError::Conflict(format!(
                "overlaps {} {}-{} ({})",
                hit.date, hit.start, hit.end, hit.project
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::testing::MemoryEntryRepository;

    fn service() -> (EntryService, Arc<MemoryEntryRepository>) {
        let repo = Arc::new(MemoryEntryRepository::default());
        (EntryService::new(repo.clone()), repo)
    }

    fn new_entry(date: &str, start: &str, end: &str, project: &str) -> NewEntry {
        NewEntry {
            date: date.to_string(),
            start: start.to_string(),
            end: end.to_string(),
            project: project.to_string(),
            activity: String::new(),
            remote: false,
        }
    }

    #[tokio::test]
    async fn create_derives_hours() {
        let (service, _) = service();
        let entry = service
            .create(new_entry("2024-03-01", "09:00", "17:30", "Alpha"), false)
            .await
            .unwrap();
        assert_eq!(entry.hours, 8.5);
        assert_eq!(entry.pause_minutes, 0);
        assert!(!entry.id.is_empty());
    }

    #[tokio::test]
    async fn overnight_entry_keeps_negative_hours() {
        let (service, _) = service();
        let entry = service
            .create(new_entry("2024-03-01", "17:00", "09:00", "Alpha"), false)
            .await
            .unwrap();
        assert_eq!(entry.hours, -8.0);
    }

    #[tokio::test]
    async fn pause_entry_records_minutes() {
        let (service, _) = service();
        let entry = service
            .create(new_entry("2024-03-01", "12:00", "12:45", "Pause"), false)
            .await
            .unwrap();
        assert_eq!(entry.pause_minutes, 45);
        assert_eq!(entry.hours, 0.75);
    }

    #[tokio::test]
    async fn vacation_entry_gets_fixed_hours() {
        let (service, _) = service();
        let entry = service
            .create(new_entry("2024-03-01", "", "", "Urlaub"), false)
            .await
            .unwrap();
        assert_eq!(entry.hours, DEFAULT_VACATION_HOURS);
        assert_eq!(entry.start, "00:00");
        assert_eq!(entry.end, "00:00");
    }

    #[tokio::test]
    async fn collision_is_a_conflict_until_overridden() {
        let (service, _) = service();
        service
            .create(new_entry("2024-03-01", "09:00", "12:00", "Alpha"), false)
            .await
            .unwrap();

        let err = service
            .create(new_entry("2024-03-01", "11:00", "13:00", "Beta"), false)
            .await
            .unwrap_err();
        assert!(matches!(err, ZeitlogError::Conflict(_)));

        // The confirmation path retries with the override flag.
        service
            .create(new_entry("2024-03-01", "11:00", "13:00", "Beta"), true)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn adjacent_entries_are_not_a_collision() {
        let (service, _) = service();
        service
            .create(new_entry("2024-03-01", "09:00", "12:00", "Alpha"), false)
            .await
            .unwrap();
        service
            .create(new_entry("2024-03-01", "12:00", "13:00", "Beta"), false)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn vacation_rejects_any_company() {
        let (service, _) = service();
        service
            .create(new_entry("2024-03-01", "09:00", "10:00", "Alpha"), false)
            .await
            .unwrap();

        let err = service
            .create(new_entry("2024-03-01", "", "", "urlaub"), false)
            .await
            .unwrap_err();
        assert!(matches!(err, ZeitlogError::Conflict(_)));

        // The override flag only bypasses interval collisions.
        let err = service.create(new_entry("2024-03-01", "", "", "Urlaub"), true).await;
        assert!(err.is_err());
    }

    #[tokio::test]
    async fn work_entry_rejected_on_vacation_day() {
        let (service, _) = service();
        service.create(new_entry("2024-03-02", "", "", "Urlaub"), false).await.unwrap();

        let err = service
            .create(new_entry("2024-03-02", "09:00", "10:00", "Alpha"), true)
            .await
            .unwrap_err();
        assert!(matches!(err, ZeitlogError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_excludes_itself_from_collision_checks() {
        let (service, _) = service();
        let entry = service
            .create(new_entry("2024-03-01", "09:00", "12:00", "Alpha"), false)
            .await
            .unwrap();

        let updated = service
            .update(&entry.id, new_entry("2024-03-01", "09:30", "12:00", "Alpha"), false)
            .await
            .unwrap();
        assert_eq!(updated.start, "09:30");
        assert_eq!(updated.id, entry.id);
        assert_eq!(updated.created_at, entry.created_at);
    }

    #[tokio::test]
    async fn missing_fields_are_invalid_input() {
        let (service, _) = service();
        let err = service
            .create(new_entry("01.03.2024", "09:00", "10:00", "Alpha"), false)
            .await
            .unwrap_err();
        assert!(matches!(err, ZeitlogError::InvalidInput(_)));

        let err = service
            .create(new_entry("2024-03-01", "", "", "Alpha"), false)
            .await
            .unwrap_err();
        assert!(matches!(err, ZeitlogError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn delete_missing_entry_is_not_found() {
        let (service, _) = service();
        let err = service.delete("nope").await.unwrap_err();
        assert!(matches!(err, ZeitlogError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_filters_by_project_and_orders() {
        let (service, _) = service();
        service
            .create(new_entry("2024-03-02", "09:00", "10:00", "Alpha"), false)
            .await
            .unwrap();
        service
            .create(new_entry("2024-03-01", "09:00", "10:00", "Beta"), false)
            .await
            .unwrap();
        service
            .create(new_entry("2024-03-01", "10:00", "11:00", "Alpha"), false)
            .await
            .unwrap();

        let all = service.list(EntryFilter::default()).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].date, "2024-03-01");

        let newest_first = service
            .list(EntryFilter { descending: true, ..Default::default() })
            .await
            .unwrap();
        assert_eq!(newest_first[0].date, "2024-03-02");

        let alpha = service
            .list(EntryFilter { project: Some("Alpha".to_string()), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(alpha.len(), 2);
    }
}
