//! Task routes

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Local;
use serde::Serialize;
use zeitlog_core::{bucket_of, NewTask};
use zeitlog_domain::{Task, TaskBucket};

use super::error::ApiResult;
use crate::context::AppContext;
use crate::utils::logging::run_logged;

/// Tasks grouped by their due-date bucket, each group newest first.
#[derive(Debug, Default, Serialize)]
pub struct TaskBuckets {
    pub overdue: Vec<Task>,
    pub due_today: Vec<Task>,
    pub upcoming: Vec<Task>,
    pub completed: Vec<Task>,
}

pub async fn list(State(ctx): State<Arc<AppContext>>) -> ApiResult<Json<Vec<Task>>> {
    let tasks = run_logged("tasks::list", ctx.tasks.list()).await?;
    Ok(Json(tasks))
}

pub async fn create(
    State(ctx): State<Arc<AppContext>>,
    Json(new): Json<NewTask>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    let task = run_logged("tasks::create", ctx.tasks.create(new)).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn update(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
    Json(new): Json<NewTask>,
) -> ApiResult<Json<Task>> {
    let task = run_logged("tasks::update", ctx.tasks.update(&id, new)).await?;
    Ok(Json(task))
}

pub async fn remove(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    run_logged("tasks::delete", ctx.tasks.delete(&id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Flip a task between open and done.
pub async fn toggle(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Task>> {
    let task = run_logged("tasks::toggle", ctx.tasks.toggle(&id)).await?;
    Ok(Json(task))
}

pub async fn buckets(State(ctx): State<Arc<AppContext>>) -> ApiResult<Json<TaskBuckets>> {
    let today = Local::now().format("%Y-%m-%d").to_string();
    let tasks = run_logged("tasks::buckets", ctx.tasks.list()).await?;

    let mut buckets = TaskBuckets::default();
    for task in tasks {
        match bucket_of(&task, &today) {
            TaskBucket::Overdue => buckets.overdue.push(task),
            TaskBucket::DueToday => buckets.due_today.push(task),
            TaskBucket::Upcoming => buckets.upcoming.push(task),
            TaskBucket::Completed => buckets.completed.push(task),
        }
    }
    Ok(Json(buckets))
}
