//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across commands: data directory
//! resolution, configuration loading, opening the booking service and
//! parsing reservation ids.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use lodge::config::DEFAULT_LOCK_WAIT_SECONDS;
use lodge::{Config, ConfigBuilder, ReservationId, ReservationService};

use crate::error::CliError;
use crate::output::OutputFormat;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the lock wait (in seconds).
    pub busy_timeout: Option<u64>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,

    /// Output format requested on the command line.
    pub output: Option<OutputFormat>,
}

/// Resolve the data directory: `--data-dir`, then `LODGE_DATA_DIR`, then
/// `~/.lodge`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match global.data_dir {
        Some(ref dir) => Ok(dir.clone()),
        None => lodge::database::resolve_data_dir()
            .map_err(|e| CliError::Config(format!("cannot resolve data directory: {e}"))),
    }
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. `config.yaml` in the data directory
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = resolve_data_dir(global)?;

    let overrides = Config {
        maximum_lock_wait_seconds: global.busy_timeout,
        disable_autoinit: global.disable_autoinit.then_some(true),
        ..Config::default()
    };

    let config = ConfigBuilder::new()
        .with_data_dir(&data_dir)
        .with_config(overrides)
        .build()?;

    log::debug!(
        "configuration loaded (lock wait {}s, default {}s)",
        config.lock_wait_seconds(),
        DEFAULT_LOCK_WAIT_SECONDS
    );
    Ok(config)
}

/// Open the booking service with configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the data directory doesn't exist and
/// auto-init is disabled.
pub fn open_service(
    global: &GlobalOptions,
    config: &Config,
) -> Result<ReservationService, CliError> {
    let data_dir = resolve_data_dir(global)?;
    ReservationService::open(&data_dir, config).map_err(CliError::from)
}

/// Pick the output format: `--output`, then configuration, then table.
pub fn output_format(global: &GlobalOptions, config: &Config) -> OutputFormat {
    global
        .output
        .unwrap_or_else(|| config.output_format().into())
}

/// Output format for error reporting, which must work even when the
/// configuration itself is broken.
pub fn error_output_format(global: &GlobalOptions) -> OutputFormat {
    match global.output {
        Some(format) => format,
        None => load_configuration(global)
            .map(|config| config.output_format().into())
            .unwrap_or_default(),
    }
}

/// Parse a reservation id given on the command line.
pub fn parse_id(raw: &str) -> Result<ReservationId, CliError> {
    raw.parse::<ReservationId>().map_err(CliError::from)
}

/// Format a timestamp for display.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}
