//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding the tracing filter directive
pub const LOG_ENV_VAR: &str = "TAXGUARD_LOG";

const DEFAULT_FILTER: &str = "taxguard=info,warn";
const LOG_FILE_NAME: &str = "taxguard.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/taxguard/logs/` because the terminal
/// itself is owned by the UI. Log level is controlled by `TAXGUARD_LOG`.
///
/// # Examples
/// ```bash
/// TAXGUARD_LOG=debug taxguard
/// TAXGUARD_LOG=taxguard_client=trace taxguard
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("taxguard starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("taxguard").join("logs")
}

/// Get the log file path for the current day
pub fn get_current_log_file() -> PathBuf {
    get_log_directory().join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_under_taxguard_logs() {
        let path = get_current_log_file();
        assert!(path.ends_with("taxguard/logs/taxguard.log"));
    }
}
