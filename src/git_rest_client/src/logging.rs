use std::path::Path;

use crate::constants::{DEFAULT_LOG_FILTER, LOG_FILE_NAME};
use anyhow::{Context, Result};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, time::SystemTime},
    prelude::*,
    EnvFilter,
};

/// Installs a global subscriber writing to `git_rest_client.log` inside `log_dir`.
///
/// Fails if the log file cannot be created or a global subscriber is already set.
pub fn setup_logging(log_dir: &Path) -> Result<()> {
    let filter = EnvFilter::from(DEFAULT_LOG_FILTER);

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(log_dir)
        .with_context(|| format!("Failed to create log file in {}", log_dir.display()))?;

    let file_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(SystemTime)
        .with_writer(file_appender);

    let subscriber = tracing_subscriber::registry().with(filter).with(file_layer);

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    tracing::info!(
        "Logging system initialized. Writing to {}",
        log_dir.join(LOG_FILE_NAME).display()
    );

    Ok(())
}
