//! Integration tests for the reporting routes over a seeded custom period.

use axum::http::{Method, StatusCode};
use serde_json::json;

mod support;
use support::{setup_test_app, TestApp};

async fn seed_entry(app: &TestApp, date: &str, start: &str, end: &str, project: &str, remote: bool) {
    let (status, _) = app
        .request(
            Method::POST,
            "/entries",
            Some(json!({
                "date": date,
                "start": start,
                "end": end,
                "project": project,
                "remote": remote
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
}

/// Two days: work split by a pause on day one, two mergeable Alpha
/// intervals on day two.
async fn seed_week(app: &TestApp) {
    seed_entry(app, "2024-03-04", "09:00", "12:00", "Alpha", false).await;
    seed_entry(app, "2024-03-04", "12:00", "12:45", "Pause", false).await;
    seed_entry(app, "2024-03-04", "12:45", "17:00", "Beta", false).await;
    seed_entry(app, "2024-03-05", "09:00", "12:00", "Alpha", true).await;
    seed_entry(app, "2024-03-05", "12:00", "17:00", "Alpha", true).await;
}

#[tokio::test]
async fn stats_exclude_pause_and_carry_target_comparison() {
    let app = setup_test_app().await;
    seed_week(&app).await;

    let (status, body) = app
        .request(
            Method::GET,
            "/reports/stats?period=custom&from=2024-03-04&to=2024-03-05",
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    // 3.0 + 4.25 + 3.0 + 5.0 working hours; the pause entry counts nowhere.
    assert_eq!(body["total_hours"], 15.25);
    assert_eq!(body["entry_count"], 4);
    assert_eq!(body["active_days"], 2);
    assert_eq!(body["remote_hours"], 8.0);
    assert_eq!(body["onsite_hours"], 7.25);
    assert_eq!(body["target"]["target_hours"], 7.8);
    assert!(body["target"]["percent_of_target"].is_number());
}

#[tokio::test]
async fn stats_respect_project_filter() {
    let app = setup_test_app().await;
    seed_week(&app).await;

    let (status, body) = app
        .request(
            Method::GET,
            "/reports/stats?period=custom&from=2024-03-04&to=2024-03-05&project=Alpha",
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_hours"], 11.0);
    assert_eq!(body["entry_count"], 3);
}

#[tokio::test]
async fn blocks_merge_consecutive_same_kind_entries() {
    let app = setup_test_app().await;
    seed_week(&app).await;

    let (status, body) = app
        .request(
            Method::GET,
            "/reports/blocks?period=custom&from=2024-03-04&to=2024-03-05",
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let blocks = body.as_array().unwrap();
    // Day one stays three blocks because the pause breaks the chain; day
    // two collapses into one.
    assert_eq!(blocks.len(), 4);

    let merged = &blocks[3];
    assert_eq!(merged["date"], "2024-03-05");
    assert_eq!(merged["start"], "09:00");
    assert_eq!(merged["end"], "17:00");
    assert_eq!(merged["hours"], 8.0);
    assert_eq!(merged["entry_count"], 2);
}

#[tokio::test]
async fn csv_export_renders_german_headers_and_locations() {
    let app = setup_test_app().await;
    seed_week(&app).await;

    let (status, body) =
        app.get_text("/reports/export.csv?period=custom&from=2024-03-04&to=2024-03-05").await;
    assert_eq!(status, StatusCode::OK);

    let mut lines = body.lines();
    assert_eq!(lines.next().unwrap(), "Datum;Start;Ende;Projekt;Tätigkeit;Stunden;Ort");
    assert!(body.contains(";Homeoffice"));
    assert!(body.contains(";Büro"));
    assert_eq!(body.lines().count(), 6);
}

#[tokio::test]
async fn csv_export_supports_merged_blocks() {
    let app = setup_test_app().await;
    seed_week(&app).await;

    let (status, body) = app
        .get_text("/reports/export.csv?period=custom&from=2024-03-04&to=2024-03-05&merged=true")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("Datum;Start;Ende;Projekte"));
    assert_eq!(body.lines().count(), 5);
}
