//! HTTP routes - outer surface over the core services

mod calendar;
mod entries;
mod error;
mod health;
mod projects;
mod push;
mod reports;
mod tasks;
mod timer;

use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::context::AppContext;

pub use error::{ApiError, ApiResult};

/// Build the application router over a shared context.
pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/entries", get(entries::list).post(entries::create))
        .route("/entries/{id}", put(entries::update).delete(entries::remove))
        .route("/reports/stats", get(reports::stats))
        .route("/reports/blocks", get(reports::blocks))
        .route("/reports/export.csv", get(reports::export_csv))
        .route("/projects", get(projects::list).post(projects::create))
        .route("/projects/{name}", put(projects::rename).delete(projects::remove))
        .route("/tasks", get(tasks::list).post(tasks::create))
        .route("/tasks/buckets", get(tasks::buckets))
        .route("/tasks/{id}", put(tasks::update).delete(tasks::remove))
        .route("/tasks/{id}/toggle", post(tasks::toggle))
        .route("/appointments", get(calendar::list).post(calendar::create))
        .route("/appointments/{id}", put(calendar::update).delete(calendar::remove))
        .route("/calendar/import", post(calendar::import))
        .route("/timer", get(timer::current))
        .route("/timer/start", post(timer::start))
        .route("/timer/stop", post(timer::stop))
        .route("/timer/reset", post(timer::reset))
        .route("/push/tokens", post(push::register))
        .route("/push/tokens/{token}", delete(push::remove))
        .route("/alarms/sweep", post(push::sweep))
        .with_state(ctx)
}
