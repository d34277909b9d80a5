//! Application context - dependency injection container

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};
use zeitlog_core::{
    AlarmService, CalendarService, DeliveryOutcome, EntryRepository, EntryService, ProjectService,
    PushNotifier, PushTokenRepository, ReportingService, TaskService, TimerRepository,
    TimerService,
};
use zeitlog_domain::{Config, Notification, Result, ZeitlogError};
use zeitlog_infra::{
    AlarmScheduler, DbManager, HttpPushNotifier, SqliteAppointmentRepository,
    SqliteEntryRepository, SqliteProjectRepository, SqlitePushTokenRepository,
    SqliteTaskRepository, SqliteTimerRepository,
};

/// Application context - holds all services and dependencies.
///
/// Constructed once at startup and shared behind an `Arc` as axum state.
/// Tests build one from a throwaway `Config` pointing at a temp database.
pub struct AppContext {
    pub config: Config,
    pub db: Arc<DbManager>,

    // Services
    pub entries: Arc<EntryService>,
    pub reports: Arc<ReportingService>,
    pub projects: Arc<ProjectService>,
    pub tasks: Arc<TaskService>,
    pub calendar: Arc<CalendarService>,
    pub timer: Arc<TimerService>,
    pub alarms: Arc<AlarmService>,

    // Raw entry access for the CSV export route (range queries bypass the
    // per-date listing filter).
    pub entry_repository: Arc<dyn EntryRepository>,
    pub push_tokens: Arc<dyn PushTokenRepository>,

    // Present when the alarm sweep is enabled in config. Locked because
    // start/stop need exclusive access.
    scheduler: Mutex<Option<AlarmScheduler>>,
}

/// Delivery sink used when no push endpoint is configured. Sweeps still
/// expire timers; notifications go nowhere.
struct DiscardingNotifier;

#[async_trait]
impl PushNotifier for DiscardingNotifier {
    async fn send(&self, token: &str, _notification: &Notification) -> Result<DeliveryOutcome> {
        debug!(token, "no push endpoint configured, notification discarded");
        Ok(DeliveryOutcome::Delivered)
    }
}

impl AppContext {
    /// Create a context from the default configuration sources.
    pub async fn new() -> Result<Self> {
        Self::new_with_config(zeitlog_infra::load_config()?).await
    }

    /// Create a context from an explicit configuration.
    ///
    /// Tests use this to point the database at a temporary directory.
    pub async fn new_with_config(config: Config) -> Result<Self> {
        let db = Arc::new(DbManager::new(&config.database.path, config.database.pool_size)?);
        db.run_migrations()?;

        let entry_repository: Arc<dyn EntryRepository> =
            Arc::new(SqliteEntryRepository::new(Arc::clone(db.pool())));
        let timer_repository: Arc<dyn TimerRepository> =
            Arc::new(SqliteTimerRepository::new(Arc::clone(db.pool())));
        let push_tokens: Arc<dyn PushTokenRepository> =
            Arc::new(SqlitePushTokenRepository::new(Arc::clone(db.pool())));

        let entries = Arc::new(
            EntryService::new(Arc::clone(&entry_repository))
                .with_vacation_hours(config.workday.vacation_hours),
        );
        let reports = Arc::new(
            ReportingService::new(Arc::clone(&entry_repository))
                .with_target_hours(config.workday.target_hours),
        );
        let projects = Arc::new(ProjectService::new(
            Arc::new(SqliteProjectRepository::new(Arc::clone(db.pool()))),
            Arc::clone(&entry_repository),
        ));
        let tasks =
            Arc::new(TaskService::new(Arc::new(SqliteTaskRepository::new(Arc::clone(db.pool())))));
        let calendar = Arc::new(CalendarService::new(Arc::new(SqliteAppointmentRepository::new(
            Arc::clone(db.pool()),
        ))));
        let timer =
            Arc::new(TimerService::new(Arc::clone(&timer_repository), Arc::clone(&entries)));

        let notifier: Arc<dyn PushNotifier> = match &config.alarm.push_endpoint {
            Some(endpoint) => Arc::new(HttpPushNotifier::new(endpoint.clone())?),
            None => Arc::new(DiscardingNotifier),
        };
        let alarms = Arc::new(AlarmService::new(
            Arc::clone(&timer_repository),
            Arc::clone(&push_tokens),
            notifier,
        ));

        let scheduler = if config.alarm.enabled {
            Some(AlarmScheduler::new(config.alarm.cron_expression.clone(), Arc::clone(&alarms)))
        } else {
            None
        };

        Ok(Self {
            config,
            db,
            entries,
            reports,
            projects,
            tasks,
            calendar,
            timer,
            alarms,
            entry_repository,
            push_tokens,
            scheduler: Mutex::new(scheduler),
        })
    }

    /// Start the alarm sweep scheduler, when one is configured.
    pub async fn start_scheduler(&self) -> Result<()> {
        let mut guard = self.scheduler.lock().await;
        match guard.as_mut() {
            Some(scheduler) => {
                scheduler.start().await.map_err(ZeitlogError::from)?;
                Ok(())
            }
            None => {
                info!("alarm scheduler disabled by configuration");
                Ok(())
            }
        }
    }

    /// Stop background work. The connection pool closes when the context
    /// is dropped.
    pub async fn shutdown(&self) -> Result<()> {
        let mut guard = self.scheduler.lock().await;
        if let Some(scheduler) = guard.as_mut() {
            if scheduler.is_running() {
                scheduler.stop().await.map_err(ZeitlogError::from)?;
            }
        }
        info!("application context shut down");
        Ok(())
    }

    /// Verify database connectivity without blocking the runtime.
    pub async fn health_check(&self) -> Result<()> {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || db.health_check())
            .await
            .map_err(|err| ZeitlogError::Internal(format!("health check task failed: {err}")))?
    }
}
