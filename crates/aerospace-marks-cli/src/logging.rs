//! Log file setup
//!
//! Logging stays disabled unless `AEROSPACE_MARKS_LOGS_LEVEL` is set. When
//! enabled, diagnostics append to the resolved log file so they never
//! interleave with command output on stdout.

use std::sync::Mutex;

use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

use crate::config;

/// Install the global subscriber according to the environment.
pub fn init() -> miette::Result<()> {
    let settings = config::log_settings();
    let Some(level) = settings.level else {
        return Ok(());
    };

    let filter =
        EnvFilter::try_new(level.to_lowercase()).unwrap_or_else(|_| EnvFilter::new("error"));

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&settings.path)
        .into_diagnostic()?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
