//! Time entry routes

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use zeitlog_domain::{EntryFilter, NewEntry, TimeEntry};

use super::error::ApiResult;
use crate::context::AppContext;
use crate::utils::logging::run_logged;

/// `?override=true` retries a create/update past a collision conflict.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct OverrideQuery {
    #[serde(rename = "override", default)]
    pub override_collision: bool,
}

pub async fn list(
    State(ctx): State<Arc<AppContext>>,
    Query(filter): Query<EntryFilter>,
) -> ApiResult<Json<Vec<TimeEntry>>> {
    let entries = run_logged("entries::list", ctx.entries.list(filter)).await?;
    Ok(Json(entries))
}

pub async fn create(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<OverrideQuery>,
    Json(new): Json<NewEntry>,
) -> ApiResult<(StatusCode, Json<TimeEntry>)> {
    let entry =
        run_logged("entries::create", ctx.entries.create(new, query.override_collision)).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn update(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
    Query(query): Query<OverrideQuery>,
    Json(new): Json<NewEntry>,
) -> ApiResult<Json<TimeEntry>> {
    let entry =
        run_logged("entries::update", ctx.entries.update(&id, new, query.override_collision))
            .await?;
    Ok(Json(entry))
}

pub async fn remove(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    run_logged("entries::delete", ctx.entries.delete(&id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
