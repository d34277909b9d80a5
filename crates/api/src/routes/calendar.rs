//! Appointment routes and the ICS import

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Local;
use serde::Deserialize;
use zeitlog_core::NewAppointment;
use zeitlog_domain::{Appointment, ImportSummary};

use super::error::ApiResult;
use crate::context::AppContext;
use crate::utils::logging::run_logged;

/// `?confirm=true` authorises the import to wipe the existing calendar.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ImportQuery {
    #[serde(default)]
    pub confirm: bool,
}

pub async fn list(State(ctx): State<Arc<AppContext>>) -> ApiResult<Json<Vec<Appointment>>> {
    let appointments = run_logged("calendar::list", ctx.calendar.list()).await?;
    Ok(Json(appointments))
}

pub async fn create(
    State(ctx): State<Arc<AppContext>>,
    Json(new): Json<NewAppointment>,
) -> ApiResult<(StatusCode, Json<Appointment>)> {
    let appointment = run_logged("calendar::create", ctx.calendar.create(new)).await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

pub async fn update(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
    Json(new): Json<NewAppointment>,
) -> ApiResult<Json<Appointment>> {
    let appointment = run_logged("calendar::update", ctx.calendar.update(&id, new)).await?;
    Ok(Json(appointment))
}

pub async fn remove(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    run_logged("calendar::delete", ctx.calendar.delete(&id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Replace the calendar with the events of a raw ICS document.
///
/// Without `?confirm=true` the route answers 409 with the event count so
/// the client can ask the user before retrying.
pub async fn import(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<ImportQuery>,
    body: String,
) -> ApiResult<Json<ImportSummary>> {
    let today = Local::now().date_naive();
    let summary =
        run_logged("calendar::import", ctx.calendar.import_reset(&body, today, query.confirm))
            .await?;
    Ok(Json(summary))
}
