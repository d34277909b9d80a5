//! Countdown/stopwatch timer types
//!
//! The durable record exists so a separately scheduled sweep can fire an
//! alarm even when the device that started the timer is gone. The live
//! value is always recomputed from `start_ts`; nothing counts ticks.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TimerMode {
    Countdown { minutes: i64 },
    Stopwatch,
}

/// Durable mirror of the running timer. One record per user; last write
/// wins, there is no versioning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    /// Unix seconds of the start instant.
    pub start_ts: i64,
    #[serde(flatten)]
    pub mode: TimerMode,
    pub project: String,
    pub activity: String,
    pub remote: bool,
    pub active: bool,
    /// Unix seconds when the countdown elapses; `None` for stopwatches.
    pub alarm_ts: Option<i64>,
    /// Set by the alarm sweep once a notification went out.
    pub notified_at: Option<i64>,
}

/// Live view reconstructed from the stored start instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub running: bool,
    pub elapsed_secs: i64,
    /// Present in countdown mode; clamped at zero once elapsed.
    pub remaining_secs: Option<i64>,
}

impl TimerState {
    /// Recompute the live view at `now` (Unix seconds).
    pub fn snapshot(&self, now: i64) -> TimerSnapshot {
        let elapsed = (now - self.start_ts).max(0);
        let remaining = match self.mode {
            TimerMode::Countdown { minutes } => Some((minutes * 60 - elapsed).max(0)),
            TimerMode::Stopwatch => None,
        };
        TimerSnapshot { running: self.active, elapsed_secs: elapsed, remaining_secs: remaining }
    }
}
