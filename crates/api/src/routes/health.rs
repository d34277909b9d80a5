//! Liveness and database health

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::context::AppContext;

/// Health report for monitoring.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: bool,
}

pub async fn health(State(ctx): State<Arc<AppContext>>) -> Json<HealthResponse> {
    let database = ctx.health_check().await.is_ok();
    let status = if database { "ok" } else { "degraded" };
    Json(HealthResponse { status, database })
}
