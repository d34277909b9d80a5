use std::future::Future;
use std::time::{Duration, Instant};

use tracing::{info, warn};
use zeitlog_domain::{Result, ZeitlogError};

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"entries::create"`).
/// * `elapsed` - Duration the command execution took.
/// * `success` - Whether the command completed successfully.
///
/// The helper keeps the route handlers concise and the log shape uniform.
/// Callers must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `ZeitlogError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &ZeitlogError) -> &'static str {
    match error {
        ZeitlogError::Database(_) => "database",
        ZeitlogError::Config(_) => "config",
        ZeitlogError::Network(_) => "network",
        ZeitlogError::NotFound(_) => "not_found",
        ZeitlogError::InvalidInput(_) => "invalid_input",
        ZeitlogError::Conflict(_) => "conflict",
        ZeitlogError::Internal(_) => "internal",
    }
}

/// Run a command future, timing it and logging its outcome.
pub async fn run_logged<T, F>(command: &str, operation: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let start = Instant::now();
    let result = operation.await;
    let elapsed = start.elapsed();

    log_command_execution(command, elapsed, result.is_ok());
    if let Err(err) = &result {
        warn!(command, error = %err, error_type = error_label(err), "command failed");
    }
    result
}
