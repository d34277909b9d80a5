//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_TARGET_HOURS, DEFAULT_VACATION_HOURS};

/// Application configuration
///
/// Every section has sensible defaults, so partial config files and a bare
/// environment both work.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub alarm: AlarmConfig,
    pub workday: WorkdayConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: String,
    pub pool_size: u32,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
}

/// Alarm sweep configuration
///
/// The sweep job polls for expired countdown timers and fans notifications
/// out to registered push tokens. `push_endpoint` is the delivery service
/// URL; when unset, sweeps still expire timers but deliver nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlarmConfig {
    pub cron_expression: String,
    pub push_endpoint: Option<String>,
    pub enabled: bool,
}

/// Workday configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkdayConfig {
    /// Regular daily working hours, used for target comparisons in reports.
    pub target_hours: f64,
    /// Hours credited for a vacation day.
    pub vacation_hours: f64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { path: "zeitlog.db".to_string(), pool_size: 8 }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { listen_addr: "127.0.0.1:4880".to_string() }
    }
}

impl Default for AlarmConfig {
    fn default() -> Self {
        Self {
            cron_expression: "0 * * * * *".to_string(), // every minute
            push_endpoint: None,
            enabled: true,
        }
    }
}

impl Default for WorkdayConfig {
    fn default() -> Self {
        Self { target_hours: DEFAULT_TARGET_HOURS, vacation_hours: DEFAULT_VACATION_HOURS }
    }
}
