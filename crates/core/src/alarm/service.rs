//! Alarm service - the periodic expired-timer sweep

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use zeitlog_domain::{Notification, Result};

use super::ports::{DeliveryOutcome, PushNotifier, PushTokenRepository};
use crate::timer::ports::TimerRepository;

/// Outcome of one sweep run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmSweep {
    /// Timers whose alarm instant had passed.
    pub expired: usize,
    /// Notifications accepted by the delivery service.
    pub delivered: usize,
    /// Dead tokens removed from the registry.
    pub pruned: usize,
    /// Deliveries that failed transiently and were left alone.
    pub failed: usize,
}

/// Periodic sweep over the durable timer record.
///
/// The timer is marked notified before any delivery attempt, so a crash
/// mid-fan-out can only lose notifications, never duplicate them. Token
/// outcomes are independent; one failing device does not block the rest.
pub struct AlarmService {
    timers: Arc<dyn TimerRepository>,
    tokens: Arc<dyn PushTokenRepository>,
    notifier: Arc<dyn PushNotifier>,
}

impl AlarmService {
    pub fn new(
        timers: Arc<dyn TimerRepository>,
        tokens: Arc<dyn PushTokenRepository>,
        notifier: Arc<dyn PushNotifier>,
    ) -> Self {
        Self { timers, tokens, notifier }
    }

    pub async fn check_expired(&self, now_ts: i64) -> Result<AlarmSweep> {
        let mut sweep = AlarmSweep::default();

        let Some(timer) = self.timers.find_expired(now_ts).await? else {
            return Ok(sweep);
        };
        sweep.expired = 1;
        self.timers.mark_notified(now_ts).await?;

        let notification = Notification {
            title: "Zeit abgelaufen!".to_string(),
            body: if timer.project.is_empty() {
                "Dein Timer ist abgelaufen.".to_string()
            } else {
                format!("Timer für {} ist abgelaufen.", timer.project)
            },
            tag: "timer-alarm".to_string(),
        };

        for token in self.tokens.list().await? {
            match self.notifier.send(&token, &notification).await {
                Ok(DeliveryOutcome::Delivered) => sweep.delivered += 1,
                Ok(DeliveryOutcome::InvalidToken) => {
                    self.tokens.remove(&token).await?;
                    sweep.pruned += 1;
                }
                Err(err) => {
                    warn!(error = %err, "push delivery failed");
                    sweep.failed += 1;
                }
            }
        }

        info!(
            delivered = sweep.delivered,
            pruned = sweep.pruned,
            failed = sweep.failed,
            "alarm sweep fired"
        );
        Ok(sweep)
    }
}
