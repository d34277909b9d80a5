//! Port interface for the durable timer record

use async_trait::async_trait;
use zeitlog_domain::{Result, TimerState};

/// Trait for the single durable timer record.
///
/// There is one record per user and the last write wins; `save` replaces
/// whatever is stored.
#[async_trait]
pub trait TimerRepository: Send + Sync {
    async fn save(&self, state: TimerState) -> Result<()>;

    /// Drop the active record, if any.
    async fn clear_active(&self) -> Result<()>;

    async fn current(&self) -> Result<Option<TimerState>>;

    /// The active countdown whose alarm instant has passed and that has
    /// not been notified yet.
    async fn find_expired(&self, now_ts: i64) -> Result<Option<TimerState>>;

    /// Record that the alarm for the active timer went out at `ts`.
    async fn mark_notified(&self, ts: i64) -> Result<()>;
}
