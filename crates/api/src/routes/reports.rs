//! Reporting routes: statistics, merged blocks, CSV export

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Local;
use serde::{Deserialize, Serialize};
use zeitlog_core::{EntryRepository, TargetComparison};
use zeitlog_domain::{resolve_range, MergedBlock, Period, PeriodStats, ZeitlogError};
use zeitlog_infra::export::csv::{write_blocks, write_entries};

use super::error::ApiResult;
use crate::context::AppContext;
use crate::utils::logging::run_logged;

/// Common report filter. `from`/`to` only apply to `period=custom`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportQuery {
    #[serde(default = "default_period")]
    pub period: Period,
    pub from: Option<String>,
    pub to: Option<String>,
    pub project: Option<String>,
    /// Export merged blocks instead of raw entries.
    #[serde(default)]
    pub merged: bool,
}

fn default_period() -> Period {
    Period::Week
}

/// Period statistics plus the comparison against the configured target.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: PeriodStats,
    pub target: TargetComparison,
}

pub async fn stats(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<ReportQuery>,
) -> ApiResult<Json<StatsResponse>> {
    let today = Local::now().date_naive();
    let stats = run_logged(
        "reports::stats",
        ctx.reports.stats(
            query.period,
            today,
            query.from.as_deref(),
            query.to.as_deref(),
            query.project.as_deref(),
        ),
    )
    .await?;
    let target = ctx.reports.target_comparison(&stats);
    Ok(Json(StatsResponse { stats, target }))
}

pub async fn blocks(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<ReportQuery>,
) -> ApiResult<Json<Vec<MergedBlock>>> {
    let today = Local::now().date_naive();
    let blocks = run_logged(
        "reports::blocks",
        ctx.reports.merged_blocks(query.period, today, query.from.as_deref(), query.to.as_deref()),
    )
    .await?;
    Ok(Json(blocks))
}

/// Render the filtered period as a semicolon-separated CSV download.
pub async fn export_csv(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<ReportQuery>,
) -> ApiResult<Response> {
    let today = Local::now().date_naive();

    let body = run_logged("reports::export_csv", async {
        let mut out = Vec::new();
        if query.merged {
            let blocks = ctx
                .reports
                .merged_blocks(query.period, today, query.from.as_deref(), query.to.as_deref())
                .await?;
            write_blocks(&mut out, &blocks)?;
        } else {
            let range =
                resolve_range(query.period, today, query.from.as_deref(), query.to.as_deref());
            let mut entries = ctx.entry_repository.find_in_range(&range).await?;
            if let Some(project) = &query.project {
                entries.retain(|e| &e.project == project);
            }
            write_entries(&mut out, &entries)?;
        }
        String::from_utf8(out)
            .map_err(|err| ZeitlogError::Internal(format!("csv is not valid utf-8: {err}")))
    })
    .await?;

    let filename = format!("Zeiterfassung_{}.csv", today.format("%Y-%m-%d"));
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{filename}\"")),
        ],
        body,
    )
        .into_response())
}
