//! Configuration loader
//!
//! Loads application configuration from a file and overlays environment
//! variables on top.
//!
//! ## Loading Strategy
//! 1. Start from the built-in defaults
//! 2. If a config file is found (probed paths or `ZEITLOG_CONFIG`), use it
//! 3. Overlay any `ZEITLOG_*` environment variables
//!
//! ## Environment Variables
//! - `ZEITLOG_CONFIG`: Explicit config file path
//! - `ZEITLOG_DB_PATH`: Database file path
//! - `ZEITLOG_DB_POOL_SIZE`: Connection pool size
//! - `ZEITLOG_HTTP_ADDR`: HTTP listen address
//! - `ZEITLOG_ALARM_CRON`: Sweep cron expression
//! - `ZEITLOG_ALARM_ENABLED`: Whether the sweep runs (true/false)
//! - `ZEITLOG_PUSH_ENDPOINT`: Push delivery service URL
//! - `ZEITLOG_TARGET_HOURS`: Regular workday hours
//! - `ZEITLOG_VACATION_HOURS`: Hours credited for a vacation day
//!
//! ## File Locations
//! The loader probes `./config.json`, `./config.toml`, `./zeitlog.json`
//! and `./zeitlog.toml` in the working directory, then the same names next
//! to the executable.

use std::path::{Path, PathBuf};

use zeitlog_domain::{Config, Result, ZeitlogError};

/// Load configuration from file (when present) plus environment overrides.
pub fn load_config() -> Result<Config> {
    let mut config = match explicit_path().or_else(probe_config_paths) {
        Some(path) => load_from_file(path)?,
        None => {
            tracing::debug!("no config file found, using defaults");
            Config::default()
        }
    };
    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load configuration from a specific file. Format is detected by
/// extension (`.json` or `.toml`).
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ZeitlogError::Config(format!("config file not found: {}", path.display())));
    }

    tracing::info!(path = %path.display(), "loading configuration from file");

    let contents = std::fs::read_to_string(path)
        .map_err(|e| ZeitlogError::Config(format!("failed to read config file: {e}")))?;
    parse_config(&contents, path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ZeitlogError::Config(format!("invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ZeitlogError::Config(format!("invalid JSON format: {e}"))),
        _ => Err(ZeitlogError::Config(format!("unsupported config format: {extension}"))),
    }
}

/// Probe the standard locations for a configuration file.
pub fn probe_config_paths() -> Option<PathBuf> {
    let names = ["config.json", "config.toml", "zeitlog.json", "zeitlog.toml"];
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(names.iter().map(|name| cwd.join(name)));
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(names.iter().map(|name| exe_dir.join(name)));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn explicit_path() -> Option<PathBuf> {
    std::env::var("ZEITLOG_CONFIG").ok().map(PathBuf::from)
}

fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Ok(path) = std::env::var("ZEITLOG_DB_PATH") {
        config.database.path = path;
    }
    if let Ok(size) = std::env::var("ZEITLOG_DB_POOL_SIZE") {
        config.database.pool_size = size
            .parse()
            .map_err(|e| ZeitlogError::Config(format!("invalid pool size: {e}")))?;
    }
    if let Ok(addr) = std::env::var("ZEITLOG_HTTP_ADDR") {
        config.server.listen_addr = addr;
    }
    if let Ok(cron) = std::env::var("ZEITLOG_ALARM_CRON") {
        config.alarm.cron_expression = cron;
    }
    if let Ok(enabled) = std::env::var("ZEITLOG_ALARM_ENABLED") {
        config.alarm.enabled = matches!(enabled.to_ascii_lowercase().as_str(), "true" | "1");
    }
    if let Ok(endpoint) = std::env::var("ZEITLOG_PUSH_ENDPOINT") {
        config.alarm.push_endpoint = Some(endpoint);
    }
    if let Ok(hours) = std::env::var("ZEITLOG_TARGET_HOURS") {
        config.workday.target_hours = hours
            .parse()
            .map_err(|e| ZeitlogError::Config(format!("invalid target hours: {e}")))?;
    }
    if let Ok(hours) = std::env::var("ZEITLOG_VACATION_HOURS") {
        config.workday.vacation_hours = hours
            .parse()
            .map_err(|e| ZeitlogError::Config(format!("invalid vacation hours: {e}")))?;
    }
    Ok(())
}
