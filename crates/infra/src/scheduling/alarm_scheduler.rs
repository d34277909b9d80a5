//! Cron-driven alarm sweep scheduler.
//!
//! Runs `AlarmService::check_expired` on a fixed cron schedule (every
//! minute by default). Lifecycle is explicit: join handles are tracked,
//! cancellation goes through a token, and every asynchronous operation is
//! wrapped in a timeout.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::task::JoinHandle;
use tokio_cron_scheduler::{Job, JobScheduler};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};
use zeitlog_core::AlarmService;

use super::error::{SchedulerError, SchedulerResult};

/// Configuration for the alarm scheduler.
#[derive(Debug, Clone)]
pub struct AlarmSchedulerConfig {
    /// Cron expression describing the sweep schedule.
    pub cron_expression: String,
    /// Timeout applied to a single sweep execution.
    pub job_timeout: Duration,
    /// Timeout for starting the underlying scheduler.
    pub start_timeout: Duration,
    /// Timeout for stopping the scheduler.
    pub stop_timeout: Duration,
    /// Timeout for awaiting the monitor task join handle.
    pub join_timeout: Duration,
}

impl Default for AlarmSchedulerConfig {
    fn default() -> Self {
        Self {
            cron_expression: "0 * * * * *".into(), // every minute
            job_timeout: Duration::from_secs(60),
            start_timeout: Duration::from_secs(5),
            stop_timeout: Duration::from_secs(5),
            join_timeout: Duration::from_secs(5),
        }
    }
}

/// Alarm sweep scheduler with explicit lifecycle management.
pub struct AlarmScheduler {
    scheduler: Option<JobScheduler>,
    config: AlarmSchedulerConfig,
    monitor_handle: Option<JoinHandle<()>>,
    cancellation: CancellationToken,
    alarms: Arc<AlarmService>,
}

impl AlarmScheduler {
    /// Create a scheduler with the default configuration.
    pub fn new(cron_expression: String, alarms: Arc<AlarmService>) -> Self {
        let config = AlarmSchedulerConfig { cron_expression, ..Default::default() };
        Self::with_config(config, alarms)
    }

    /// Create a scheduler with a custom configuration.
    pub fn with_config(config: AlarmSchedulerConfig, alarms: Arc<AlarmService>) -> Self {
        Self {
            scheduler: None,
            config,
            monitor_handle: None,
            cancellation: CancellationToken::new(),
            alarms,
        }
    }

    /// Start the scheduler, spawning the monitoring task.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> SchedulerResult<()> {
        if self.is_running() {
            return Err(SchedulerError::AlreadyRunning);
        }

        self.cancellation = CancellationToken::new();

        let scheduler_instance = self.build_scheduler().await?;
        let start_timeout = self.config.start_timeout;

        tokio::time::timeout(start_timeout, scheduler_instance.start())
            .await
            .map_err(|_| SchedulerError::Timeout { seconds: start_timeout.as_secs() })?
            .map_err(|source| SchedulerError::StartFailed(source.to_string()))?;

        self.scheduler = Some(scheduler_instance);

        let cancel = self.cancellation.clone();
        let handle = tokio::spawn(async move {
            cancel.cancelled().await;
            debug!("alarm scheduler monitor task finished");
        });
        self.monitor_handle = Some(handle);

        info!(cron = %self.config.cron_expression, "alarm scheduler started");
        Ok(())
    }

    /// Stop the scheduler and wait for the monitor task to finish.
    #[instrument(skip(self))]
    pub async fn stop(&mut self) -> SchedulerResult<()> {
        if !self.is_running() {
            return Err(SchedulerError::NotRunning);
        }

        self.cancellation.cancel();

        let mut scheduler = match self.scheduler.take() {
            Some(scheduler) => scheduler,
            None => return Err(SchedulerError::NotRunning),
        };

        let stop_timeout = self.config.stop_timeout;
        tokio::time::timeout(stop_timeout, async move { scheduler.shutdown().await })
            .await
            .map_err(|_| SchedulerError::Timeout { seconds: stop_timeout.as_secs() })?
            .map_err(|source| SchedulerError::StopFailed(source.to_string()))?;

        if let Some(handle) = self.monitor_handle.take() {
            let join_timeout = self.config.join_timeout;
            tokio::time::timeout(join_timeout, handle)
                .await
                .map_err(|_| SchedulerError::Timeout { seconds: join_timeout.as_secs() })?
                .map_err(|source| SchedulerError::TaskJoinFailed(source.to_string()))?;
        }

        info!("alarm scheduler stopped");
        self.cancellation = CancellationToken::new();
        Ok(())
    }

    /// Returns true when a scheduler instance is active.
    pub fn is_running(&self) -> bool {
        self.scheduler.is_some()
    }

    async fn build_scheduler(&self) -> SchedulerResult<JobScheduler> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|source| SchedulerError::CreationFailed(source.to_string()))?;

        let cron_expr = self.config.cron_expression.clone();
        let alarms = self.alarms.clone();
        let job_timeout = self.config.job_timeout;

        let job_definition = Job::new_async(cron_expr.as_str(), move |_id, _lock| {
            let alarms = alarms.clone();
            Box::pin(async move {
                let now_ts = Utc::now().timestamp();
                match tokio::time::timeout(job_timeout, alarms.check_expired(now_ts)).await {
                    Ok(Ok(sweep)) => {
                        if sweep.expired > 0 {
                            debug!(
                                delivered = sweep.delivered,
                                pruned = sweep.pruned,
                                failed = sweep.failed,
                                "alarm sweep completed"
                            );
                        }
                    }
                    Ok(Err(err)) => {
                        error!(error = %err, "alarm sweep failed");
                    }
                    Err(_) => {
                        warn!(timeout_secs = job_timeout.as_secs(), "alarm sweep timed out");
                    }
                }
            })
        })
        .map_err(|source| SchedulerError::JobRegistrationFailed(source.to_string()))?;

        let job_id = job_definition.guid();
        scheduler
            .add(job_definition)
            .await
            .map_err(|source| SchedulerError::JobRegistrationFailed(source.to_string()))?;

        debug!(cron = %self.config.cron_expression, job_id = %job_id, "registered alarm sweep job");
        Ok(scheduler)
    }
}
