//! Tracing initialization.
//!
//! The terminal belongs to the UI, so log output goes to a file.

use crate::config::Config;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// # Arguments
/// * `config` - Supplies `log_level` and `log_path`
///
/// # Returns
/// * `Result<PathBuf>` - Path of the log file
///
/// # Details
/// `RUST_LOG` overrides `log_level`. Lines are appended with RFC 3339 UTC
/// timestamps and no ANSI colors. Calling this twice leaves the first
/// subscriber in place.
pub fn init_tracing(config: &Config) -> Result<PathBuf> {
    let log_path = config.log_file_path()?;
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init();

    Ok(log_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_tracing_creates_log_file() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("logs").join("news-tui.log");
        let config = Config {
            log_path: log_path.display().to_string(),
            log_level: "debug".to_string(),
            ..Config::default()
        };

        let path = init_tracing(&config).unwrap();
        assert_eq!(path, log_path);
        assert!(log_path.exists());
    }
}
