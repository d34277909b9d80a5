//! Timer routes

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};
use zeitlog_domain::{TimeEntry, TimerMode, TimerSnapshot, TimerState};

use super::error::ApiResult;
use crate::context::AppContext;
use crate::utils::logging::run_logged;

/// Start request. The mode is tagged, so a countdown reads
/// `{ "mode": "countdown", "minutes": 25, "project": "..." }`.
#[derive(Debug, Clone, Deserialize)]
pub struct StartTimer {
    #[serde(flatten)]
    pub mode: TimerMode,
    pub project: String,
    #[serde(default)]
    pub activity: String,
    #[serde(default)]
    pub remote: bool,
}

/// Stored record plus the live view derived from it.
#[derive(Debug, Clone, Serialize)]
pub struct TimerView {
    pub state: TimerState,
    pub snapshot: TimerSnapshot,
}

pub async fn start(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<StartTimer>,
) -> ApiResult<(StatusCode, Json<TimerState>)> {
    let state = run_logged(
        "timer::start",
        ctx.timer.start(body.mode, &body.project, &body.activity, body.remote, Local::now()),
    )
    .await?;
    Ok((StatusCode::CREATED, Json(state)))
}

/// Stop the running timer. Answers `null` when the run was too short to
/// book an entry.
pub async fn stop(State(ctx): State<Arc<AppContext>>) -> ApiResult<Json<Option<TimeEntry>>> {
    let entry = run_logged("timer::stop", ctx.timer.stop(Local::now())).await?;
    Ok(Json(entry))
}

pub async fn reset(State(ctx): State<Arc<AppContext>>) -> ApiResult<StatusCode> {
    run_logged("timer::reset", ctx.timer.reset()).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn current(State(ctx): State<Arc<AppContext>>) -> ApiResult<Json<Option<TimerView>>> {
    let view = run_logged("timer::current", ctx.timer.current(Utc::now().timestamp()))
        .await?
        .map(|(state, snapshot)| TimerView { state, snapshot });
    Ok(Json(view))
}
