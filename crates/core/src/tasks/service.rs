//! Task service - to-do lifecycle and due-date bucketing

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use zeitlog_domain::{Result, Task, TaskBucket, TaskPriority, TaskStatus, ZeitlogError};

use super::ports::TaskRepository;

/// Caller-supplied fields for creating or editing a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default = "default_priority")]
    pub priority: TaskPriority,
    #[serde(default)]
    pub notes: String,
}

fn default_priority() -> TaskPriority {
    TaskPriority::Medium
}

pub struct TaskService {
    repository: Arc<dyn TaskRepository>,
}

impl TaskService {
    pub fn new(repository: Arc<dyn TaskRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, new: NewTask) -> Result<Task> {
        let new = validate(new)?;
        let task = Task {
            id: Uuid::now_v7().to_string(),
            title: new.title,
            due_date: new.due_date,
            priority: new.priority,
            notes: new.notes,
            status: TaskStatus::Open,
            created_at: Utc::now().timestamp(),
        };
        self.repository.insert(task.clone()).await?;
        info!(task_id = %task.id, "task created");
        Ok(task)
    }

    pub async fn update(&self, id: &str, new: NewTask) -> Result<Task> {
        let existing = self.get(id).await?;
        let new = validate(new)?;
        let task = Task {
            id: existing.id,
            title: new.title,
            due_date: new.due_date,
            priority: new.priority,
            notes: new.notes,
            status: existing.status,
            created_at: existing.created_at,
        };
        self.repository.update(task.clone()).await?;
        Ok(task)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.get(id).await?;
        self.repository.delete(id).await?;
        info!(task_id = %id, "task deleted");
        Ok(())
    }

    /// Flip a task between open and done.
    pub async fn toggle(&self, id: &str) -> Result<Task> {
        let mut task = self.get(id).await?;
        task.status = match task.status {
            TaskStatus::Open => TaskStatus::Done,
            TaskStatus::Done => TaskStatus::Open,
        };
        self.repository.set_status(id, task.status).await?;
        Ok(task)
    }

    pub async fn list(&self) -> Result<Vec<Task>> {
        self.repository.list().await
    }

    pub async fn get(&self, id: &str) -> Result<Task> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| ZeitlogError::NotFound(format!("task {id}")))
    }
}

/// Classify a task against the current date for rendering.
///
/// Done tasks are always Completed. Open tasks without a due date are
/// Upcoming. Dates compare lexically, same as the entry range filters.
pub fn bucket_of(task: &Task, today: &str) -> TaskBucket {
    if task.status == TaskStatus::Done {
        return TaskBucket::Completed;
    }
    match task.due_date.as_deref() {
        Some(due) if due < today => TaskBucket::Overdue,
        Some(due) if due == today => TaskBucket::DueToday,
        _ => TaskBucket::Upcoming,
    }
}

fn validate(mut new: NewTask) -> Result<NewTask> {
    new.title = new.title.trim().to_string();
    if new.title.is_empty() {
        return Err(ZeitlogError::InvalidInput("task title is required".to_string()));
    }
    if let Some(due) = &new.due_date {
        if NaiveDate::parse_from_str(due, "%Y-%m-%d").is_err() {
            return Err(ZeitlogError::InvalidInput(format!("invalid due date '{due}'")));
        }
    }
    Ok(new)
}
