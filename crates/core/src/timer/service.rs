//! Timer service - start/stop lifecycle and entry hand-off

use std::sync::Arc;

use chrono::{DateTime, Duration, Local};
use tracing::info;
use zeitlog_domain::constants::MIN_TIMER_ENTRY_SECS;
use zeitlog_domain::{
    NewEntry, Result, TimeEntry, TimerMode, TimerSnapshot, TimerState, ZeitlogError,
};

use super::ports::TimerRepository;
use crate::entries::EntryService;

/// Timer lifecycle service.
///
/// The running timer is mirrored into a durable record at start so a
/// scheduler on another machine can fire the alarm. Stopping a timer that
/// ran longer than a minute hands the interval to the entry service;
/// shorter runs are discarded as accidental starts.
pub struct TimerService {
    repository: Arc<dyn TimerRepository>,
    entries: Arc<EntryService>,
}

impl TimerService {
    pub fn new(repository: Arc<dyn TimerRepository>, entries: Arc<EntryService>) -> Self {
        Self { repository, entries }
    }

    /// Start a timer, replacing any running one (last write wins).
    pub async fn start(
        &self,
        mode: TimerMode,
        project: &str,
        activity: &str,
        remote: bool,
        now: DateTime<Local>,
    ) -> Result<TimerState> {
        let project = project.trim();
        if project.is_empty() {
            return Err(ZeitlogError::InvalidInput("project is required".to_string()));
        }
        let alarm_ts = match mode {
            TimerMode::Countdown { minutes } if minutes < 1 => {
                return Err(ZeitlogError::InvalidInput(
                    "countdown minutes must be positive".to_string(),
                ));
            }
            TimerMode::Countdown { minutes } => Some(now.timestamp() + minutes * 60),
            TimerMode::Stopwatch => None,
        };

        let state = TimerState {
            start_ts: now.timestamp(),
            mode,
            project: project.to_string(),
            activity: activity.to_string(),
            remote,
            active: true,
            alarm_ts,
            notified_at: None,
        };
        self.repository.save(state.clone()).await?;
        info!(project = %state.project, ?mode, "timer started");
        Ok(state)
    }

    /// Stop the running timer. Returns the saved entry, or `None` when the
    /// run was too short to keep.
    pub async fn stop(&self, now: DateTime<Local>) -> Result<Option<TimeEntry>> {
        let state = self
            .repository
            .current()
            .await?
            .ok_or_else(|| ZeitlogError::NotFound("no timer is running".to_string()))?;
        self.repository.clear_active().await?;

        let elapsed = now.timestamp() - state.start_ts;
        if elapsed <= MIN_TIMER_ENTRY_SECS {
            info!(elapsed, "timer discarded, run too short");
            return Ok(None);
        }

        let start_dt = local_from_ts(state.start_ts)?;
        let end_dt = match state.mode {
            // A countdown books its planned length even when stopped late.
            TimerMode::Countdown { minutes } => start_dt + Duration::minutes(minutes),
            TimerMode::Stopwatch => now,
        };

        let entry = self
            .entries
            .create(
                NewEntry {
                    date: start_dt.format("%Y-%m-%d").to_string(),
                    start: start_dt.format("%H:%M").to_string(),
                    end: end_dt.format("%H:%M").to_string(),
                    project: state.project,
                    activity: state.activity,
                    remote: state.remote,
                },
                true,
            )
            .await?;
        info!(entry_id = %entry.id, hours = entry.hours, "timer saved as entry");
        Ok(Some(entry))
    }

    /// Discard the running timer without saving anything.
    pub async fn reset(&self) -> Result<()> {
        self.repository.clear_active().await?;
        info!("timer reset");
        Ok(())
    }

    /// The stored record plus its live view at `now_ts`.
    pub async fn current(&self, now_ts: i64) -> Result<Option<(TimerState, TimerSnapshot)>> {
        Ok(self.repository.current().await?.map(|state| {
            let snapshot = state.snapshot(now_ts);
            (state, snapshot)
        }))
    }
}

fn local_from_ts(ts: i64) -> Result<DateTime<Local>> {
    DateTime::from_timestamp(ts, 0)
        .map(|utc| utc.with_timezone(&Local))
        .ok_or_else(|| ZeitlogError::Internal(format!("timestamp {ts} out of range")))
}
