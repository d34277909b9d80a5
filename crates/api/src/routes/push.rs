//! Push token registry and the manual alarm sweep

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use zeitlog_core::{AlarmSweep, PushTokenRepository};
use zeitlog_domain::ZeitlogError;

use super::error::ApiResult;
use crate::context::AppContext;
use crate::utils::logging::run_logged;

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterToken {
    pub token: String,
}

/// Register a device push token. Re-registering is a no-op.
pub async fn register(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<RegisterToken>,
) -> ApiResult<StatusCode> {
    run_logged("push::register", async {
        let token = body.token.trim();
        if token.is_empty() {
            return Err(ZeitlogError::InvalidInput("token is required".to_string()));
        }
        ctx.push_tokens.register(token).await
    })
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn remove(
    State(ctx): State<Arc<AppContext>>,
    Path(token): Path<String>,
) -> ApiResult<StatusCode> {
    run_logged("push::remove", ctx.push_tokens.remove(&token)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Run one alarm sweep immediately, outside the cron schedule.
pub async fn sweep(State(ctx): State<Arc<AppContext>>) -> ApiResult<Json<AlarmSweep>> {
    let sweep =
        run_logged("alarms::sweep", ctx.alarms.check_expired(Utc::now().timestamp())).await?;
    Ok(Json(sweep))
}
