use std::fs;
use tracing::warn;
use tracing_appender::non_blocking::NonBlocking;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

/// Initializes console logging (stderr) and, when enabled, a daily-rolling JSON log file.
pub fn init_logging(config: &LoggingConfig) {
    // Respect RUST_LOG if set; otherwise use the configured default
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    // stdout carries command output
    let console_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);

    let (file_writer, file_error) = match log_file_writer(config) {
        Ok(writer) => (writer, None),
        Err(e) => (None, Some(e)),
    };
    let file_layer = file_writer.map(|writer| fmt::layer().json().with_writer(writer));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    if let Some(e) = file_error {
        warn!(directory = %config.directory, error = %e, "file logging disabled");
    }
}

/// Non-blocking writer for the rolling log file, or `None` when file output is off
fn log_file_writer(config: &LoggingConfig) -> std::io::Result<Option<NonBlocking>> {
    if !config.file_output {
        return Ok(None);
    }

    fs::create_dir_all(&config.directory)?;
    let file_appender = tracing_appender::rolling::daily(&config.directory, &config.file_prefix);
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
    // The guard flushes on drop; keep it for the life of the process
    std::mem::forget(guard);
    Ok(Some(non_blocking_writer))
}
