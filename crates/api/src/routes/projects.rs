//! Project routes

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use zeitlog_domain::Project;

use super::error::ApiResult;
use crate::context::AppContext;
use crate::utils::logging::run_logged;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenameProject {
    pub new_name: String,
}

pub async fn list(State(ctx): State<Arc<AppContext>>) -> ApiResult<Json<Vec<Project>>> {
    let projects = run_logged("projects::list", ctx.projects.list()).await?;
    Ok(Json(projects))
}

pub async fn create(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<CreateProject>,
) -> ApiResult<(StatusCode, Json<Project>)> {
    let project = run_logged("projects::create", ctx.projects.create(&body.name, body.color))
        .await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// Rename a project and cascade the new label to its entries.
pub async fn rename(
    State(ctx): State<Arc<AppContext>>,
    Path(name): Path<String>,
    Json(body): Json<RenameProject>,
) -> ApiResult<Json<Project>> {
    let project = run_logged("projects::rename", ctx.projects.rename(&name, &body.new_name))
        .await?;
    Ok(Json(project))
}

pub async fn remove(
    State(ctx): State<Arc<AppContext>>,
    Path(name): Path<String>,
) -> ApiResult<StatusCode> {
    run_logged("projects::delete", ctx.projects.delete(&name)).await?;
    Ok(StatusCode::NO_CONTENT)
}
