//! In-memory port implementations for service tests
//!
//! Each fake honours the ordering contract of the port it stands in for,
//! so service tests exercise the same invariants the SQLite adapters
//! provide.

use std::collections::HashSet;

use async_trait::async_trait;
use parking_lot::Mutex;
use zeitlog_domain::{
    Appointment, DateRange, Notification, Project, Result, Task, TaskStatus, TimeEntry,
    TimerState,
};

use crate::alarm::ports::{DeliveryOutcome, PushNotifier, PushTokenRepository};
use crate::calendar::ports::AppointmentRepository;
use crate::entries::ports::EntryRepository;
use crate::projects::ports::ProjectRepository;
use crate::tasks::ports::TaskRepository;
use crate::timer::ports::TimerRepository;

/// Entries, ordered by `(date, start)` like the SQLite adapter.
#[derive(Default)]
pub struct MemoryEntryRepository {
    entries: Mutex<Vec<TimeEntry>>,
}

impl MemoryEntryRepository {
    fn sorted(&self) -> Vec<TimeEntry> {
        let mut entries = self.entries.lock().clone();
        entries.sort_by(|a, b| (&a.date, &a.start).cmp(&(&b.date, &b.start)));
        entries
    }
}

#[async_trait]
impl EntryRepository for MemoryEntryRepository {
    async fn insert(&self, entry: TimeEntry) -> Result<()> {
        self.entries.lock().push(entry);
        Ok(())
    }

    async fn update(&self, entry: TimeEntry) -> Result<()> {
        let mut entries = self.entries.lock();
        if let Some(slot) = entries.iter_mut().find(|e| e.id == entry.id) {
            *slot = entry;
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.entries.lock().retain(|e| e.id != id);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<TimeEntry>> {
        Ok(self.entries.lock().iter().find(|e| e.id == id).cloned())
    }

    async fn find_by_date(&self, date: &str) -> Result<Vec<TimeEntry>> {
        Ok(self.sorted().into_iter().filter(|e| e.date == date).collect())
    }

    async fn find_in_range(&self, range: &DateRange) -> Result<Vec<TimeEntry>> {
        Ok(self.sorted().into_iter().filter(|e| range.contains(&e.date)).collect())
    }

    async fn find_all(&self) -> Result<Vec<TimeEntry>> {
        Ok(self.sorted())
    }

    async fn rename_project(&self, old: &str, new: &str) -> Result<usize> {
        let mut entries = self.entries.lock();
        let mut touched = 0;
        for entry in entries.iter_mut().filter(|e| e.project == old) {
            entry.project = new.to_string();
            touched += 1;
        }
        Ok(touched)
    }
}

#[derive(Default)]
pub struct MemoryProjectRepository {
    projects: Mutex<Vec<Project>>,
}

#[async_trait]
impl ProjectRepository for MemoryProjectRepository {
    async fn upsert(&self, project: Project) -> Result<()> {
        let mut projects = self.projects.lock();
        projects.retain(|p| p.name != project.name);
        projects.push(project);
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<()> {
        self.projects.lock().retain(|p| p.name != name);
        Ok(())
    }

    async fn get(&self, name: &str) -> Result<Option<Project>> {
        Ok(self.projects.lock().iter().find(|p| p.name == name).cloned())
    }

    async fn list(&self) -> Result<Vec<Project>> {
        let mut projects = self.projects.lock().clone();
        projects.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(projects)
    }
}

/// Tasks, newest first like the SQLite adapter.
#[derive(Default)]
pub struct MemoryTaskRepository {
    tasks: Mutex<Vec<Task>>,
}

#[async_trait]
impl TaskRepository for MemoryTaskRepository {
    async fn insert(&self, task: Task) -> Result<()> {
        self.tasks.lock().push(task);
        Ok(())
    }

    async fn update(&self, task: Task) -> Result<()> {
        let mut tasks = self.tasks.lock();
        if let Some(slot) = tasks.iter_mut().find(|t| t.id == task.id) {
            *slot = task;
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.tasks.lock().retain(|t| t.id != id);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Task>> {
        Ok(self.tasks.lock().iter().find(|t| t.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Task>> {
        let mut tasks = self.tasks.lock().clone();
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tasks)
    }

    async fn set_status(&self, id: &str, status: TaskStatus) -> Result<()> {
        let mut tasks = self.tasks.lock();
        if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
            task.status = status;
        }
        Ok(())
    }
}

/// Appointments, ordered by start timestamp.
#[derive(Default)]
pub struct MemoryAppointmentRepository {
    appointments: Mutex<Vec<Appointment>>,
}

#[async_trait]
impl AppointmentRepository for MemoryAppointmentRepository {
    async fn insert(&self, appointment: Appointment) -> Result<()> {
        self.appointments.lock().push(appointment);
        Ok(())
    }

    async fn insert_batch(&self, appointments: Vec<Appointment>) -> Result<()> {
        self.appointments.lock().extend(appointments);
        Ok(())
    }

    async fn update(&self, appointment: Appointment) -> Result<()> {
        let mut appointments = self.appointments.lock();
        if let Some(slot) = appointments.iter_mut().find(|a| a.id == appointment.id) {
            *slot = appointment;
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.appointments.lock().retain(|a| a.id != id);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Appointment>> {
        Ok(self.appointments.lock().iter().find(|a| a.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Appointment>> {
        let mut appointments = self.appointments.lock().clone();
        appointments.sort_by(|a, b| a.start.cmp(&b.start));
        Ok(appointments)
    }

    async fn delete_all(&self) -> Result<usize> {
        let mut appointments = self.appointments.lock();
        let count = appointments.len();
        appointments.clear();
        Ok(count)
    }
}

#[derive(Default)]
pub struct MemoryTimerRepository {
    state: Mutex<Option<TimerState>>,
}

#[async_trait]
impl TimerRepository for MemoryTimerRepository {
    async fn save(&self, state: TimerState) -> Result<()> {
        *self.state.lock() = Some(state);
        Ok(())
    }

    async fn clear_active(&self) -> Result<()> {
        *self.state.lock() = None;
        Ok(())
    }

    async fn current(&self) -> Result<Option<TimerState>> {
        Ok(self.state.lock().clone().filter(|s| s.active))
    }

    async fn find_expired(&self, now_ts: i64) -> Result<Option<TimerState>> {
        Ok(self.state.lock().clone().filter(|s| {
            s.active && s.notified_at.is_none() && s.alarm_ts.is_some_and(|ts| ts <= now_ts)
        }))
    }

    async fn mark_notified(&self, ts: i64) -> Result<()> {
        if let Some(state) = self.state.lock().as_mut() {
            state.notified_at = Some(ts);
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryPushTokenRepository {
    tokens: Mutex<Vec<String>>,
}

impl MemoryPushTokenRepository {
    pub fn seed(&self, token: &str) {
        self.tokens.lock().push(token.to_string());
    }
}

#[async_trait]
impl PushTokenRepository for MemoryPushTokenRepository {
    async fn register(&self, token: &str) -> Result<()> {
        let mut tokens = self.tokens.lock();
        if !tokens.iter().any(|t| t == token) {
            tokens.push(token.to_string());
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<String>> {
        Ok(self.tokens.lock().clone())
    }

    async fn remove(&self, token: &str) -> Result<()> {
        self.tokens.lock().retain(|t| t != token);
        Ok(())
    }
}

/// Notifier whose per-token behaviour is scripted by the test.
#[derive(Default)]
pub struct ScriptedNotifier {
    sent: Mutex<Vec<String>>,
    failing: Mutex<HashSet<String>>,
    invalid: Mutex<HashSet<String>>,
    last: Mutex<Option<Notification>>,
}

impl ScriptedNotifier {
    /// Make deliveries to `token` fail transiently.
    pub fn fail_token(&self, token: &str) {
        self.failing.lock().insert(token.to_string());
    }

    /// Make the delivery service reject `token` as dead.
    pub fn invalidate_token(&self, token: &str) {
        self.invalid.lock().insert(token.to_string());
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().clone()
    }

    pub fn last_notification(&self) -> Option<Notification> {
        self.last.lock().clone()
    }
}

#[async_trait]
impl PushNotifier for ScriptedNotifier {
    async fn send(&self, token: &str, notification: &Notification) -> Result<DeliveryOutcome> {
        *self.last.lock() = Some(notification.clone());
        if self.failing.lock().contains(token) {
            return Err(zeitlog_domain::ZeitlogError::Network("delivery refused".to_string()));
        }
        if self.invalid.lock().contains(token) {
            return Ok(DeliveryOutcome::InvalidToken);
        }
        self.sent.lock().push(token.to_string());
        Ok(DeliveryOutcome::Delivered)
    }
}
