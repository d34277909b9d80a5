//! HTTP client for the push delivery endpoint.
//!
//! POSTs one JSON payload per token. The endpoint answering 404 or 410
//! means the token is dead; the sweep treats that as a normal outcome and
//! prunes the token, so it is not surfaced as an error here.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};
use zeitlog_core::alarm::ports::{DeliveryOutcome, PushNotifier};
use zeitlog_domain::{Notification, Result, ZeitlogError};

use crate::errors::InfraError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Serialize)]
struct PushPayload<'a> {
    token: &'a str,
    title: &'a str,
    body: &'a str,
    tag: &'a str,
}

pub struct HttpPushNotifier {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpPushNotifier {
    pub fn new(endpoint: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(InfraError::from)?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl PushNotifier for HttpPushNotifier {
    async fn send(&self, token: &str, notification: &Notification) -> Result<DeliveryOutcome> {
        let payload = PushPayload {
            token,
            title: &notification.title,
            body: &notification.body,
            tag: &notification.tag,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(InfraError::from)?;

        let status = response.status();
        if status.is_success() {
            debug!(status = %status, "push delivered");
            return Ok(DeliveryOutcome::Delivered);
        }
        if status == reqwest::StatusCode::NOT_FOUND || status == reqwest::StatusCode::GONE {
            warn!(status = %status, "push token rejected as dead");
            return Ok(DeliveryOutcome::InvalidToken);
        }
        Err(ZeitlogError::Network(format!("push endpoint answered {status}")))
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn notification() -> Notification {
        Notification {
            title: "Zeit abgelaufen!".to_string(),
            body: "Timer für Alpha ist abgelaufen.".to_string(),
            tag: "timer-alarm".to_string(),
        }
    }

    #[tokio::test]
    async fn success_is_delivered() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/push"))
            .and(body_partial_json(serde_json::json!({
                "token": "abc",
                "title": "Zeit abgelaufen!",
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let notifier = HttpPushNotifier::new(format!("{}/push", server.uri())).unwrap();
        let outcome = notifier.send("abc", &notification()).await.unwrap();
        assert_eq!(outcome, DeliveryOutcome::Delivered);
    }

    #[tokio::test]
    async fn dead_token_statuses_map_to_invalid_token() {
        for status in [404u16, 410] {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .respond_with(ResponseTemplate::new(status))
                .mount(&server)
                .await;

            let notifier = HttpPushNotifier::new(server.uri()).unwrap();
            let outcome = notifier.send("dead", &notification()).await.unwrap();
            assert_eq!(outcome, DeliveryOutcome::InvalidToken, "status {status}");
        }
    }

    #[tokio::test]
    async fn server_errors_are_network_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let notifier = HttpPushNotifier::new(server.uri()).unwrap();
        let err = notifier.send("abc", &notification()).await.unwrap_err();
        assert!(matches!(err, ZeitlogError::Network(_)));
    }
}
