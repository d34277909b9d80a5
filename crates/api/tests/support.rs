use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;
use zeitlog_app::{router, AppContext};
use zeitlog_domain::Config;

/// Shared harness for integration tests driving the full router.
pub struct TestApp {
    pub router: Router,
    pub ctx: Arc<AppContext>,
    /// Keep temporary directory alive for the lifetime of the harness.
    _temp_dir: TempDir,
}

/// Build an app over a fresh temp-file database. The alarm scheduler is
/// disabled; sweeps are driven through POST /alarms/sweep.
pub async fn setup_test_app() -> TestApp {
    let temp_dir = TempDir::new().expect("failed to create temporary database directory");

    let mut config = Config::default();
    config.database.path = temp_dir.path().join("zeitlog.db").to_string_lossy().into_owned();
    config.alarm.enabled = false;

    let ctx =
        Arc::new(AppContext::new_with_config(config).await.expect("failed to build app context"));

    TestApp { router: router(Arc::clone(&ctx)), ctx, _temp_dir: temp_dir }
}

impl TestApp {
    /// Send a request with an optional JSON body; parse the response as JSON.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("failed to build request");

        let response = self.router.clone().oneshot(request).await.expect("router failed");
        let status = response.status();
        let bytes =
            response.into_body().collect().await.expect("failed to read body").to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body is not JSON")
        };
        (status, value)
    }

    /// Send a request with a plain-text body (ICS import).
    pub async fn request_text(
        &self,
        method: Method,
        uri: &str,
        body: &str,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "text/calendar")
            .body(Body::from(body.to_string()))
            .expect("failed to build request");

        let response = self.router.clone().oneshot(request).await.expect("router failed");
        let status = response.status();
        let bytes =
            response.into_body().collect().await.expect("failed to read body").to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body is not JSON")
        };
        (status, value)
    }

    /// GET a route and return the raw response body as text.
    pub async fn get_text(&self, uri: &str) -> (StatusCode, String) {
        let request =
            Request::builder().uri(uri).body(Body::empty()).expect("failed to build request");
        let response = self.router.clone().oneshot(request).await.expect("router failed");
        let status = response.status();
        let bytes =
            response.into_body().collect().await.expect("failed to read body").to_bytes();
        (status, String::from_utf8(bytes.to_vec()).expect("response body is not utf-8"))
    }
}
