//! Logging configuration using tracing
//!
//! The terminal belongs to the TUI, so logs go to a file only.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/gstview/logs/`
/// Log level is controlled by the `GSTVIEW_LOG` environment variable.
///
/// # Examples
/// ```bash
/// GSTVIEW_LOG=debug cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "gstview.log");

    // Default to info, allow override via GSTVIEW_LOG
    let env_filter = EnvFilter::try_from_env("GSTVIEW_LOG")
        .unwrap_or_else(|_| EnvFilter::new("gstview=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("gstview starting, log directory: {}", log_dir.display());

    Ok(())
}

/// Directory that receives the rolling log files
fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("gstview").join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_ends_with_crate_path() {
        let dir = log_directory();
        assert!(dir.ends_with("gstview/logs"));
    }
}
