//! Port interfaces for push token storage and notification delivery

use async_trait::async_trait;
use zeitlog_domain::{Notification, Result};

/// What happened to one delivery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered,
    /// The delivery service rejected the token as dead. The sweep prunes
    /// these; it is a normal outcome, not an error.
    InvalidToken,
}

/// Trait for the registered device push tokens.
#[async_trait]
pub trait PushTokenRepository: Send + Sync {
    /// Register a token; registering the same token twice is a no-op.
    async fn register(&self, token: &str) -> Result<()>;

    async fn list(&self) -> Result<Vec<String>>;

    async fn remove(&self, token: &str) -> Result<()>;
}

/// Trait for handing a notification to the delivery service.
#[async_trait]
pub trait PushNotifier: Send + Sync {
    async fn send(&self, token: &str, notification: &Notification) -> Result<DeliveryOutcome>;
}
