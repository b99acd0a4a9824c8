//! Configuration schema definitions.
//!
//! This module defines the configuration file structure for lodge. Every
//! field is optional so that layers can be merged; defaults are applied by
//! the accessor methods.

use serde::{Deserialize, Serialize};

/// Default number of seconds a writer waits for the database lock.
pub const DEFAULT_LOCK_WAIT_SECONDS: u64 = 5;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use lodge::config::{Config, OutputFormat};
///
/// let config: Config = serde_yaml::from_str(
///     "reject_past_dates: true\noutput_format: json\n",
/// ).unwrap();
/// assert!(config.rejects_past_dates());
/// assert_eq!(config.output_format(), OutputFormat::Json);
/// assert_eq!(config.lock_wait_seconds(), 5);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Refuse bookings whose start date lies before today.
    pub reject_past_dates: Option<bool>,

    /// Maximum time to wait for the database write lock (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Output format for listing commands.
    pub output_format: Option<OutputFormat>,

    /// Disable automatic creation of the data directory and database.
    pub disable_autoinit: Option<bool>,
}

impl Config {
    /// Overlays `other` on top of `self`; fields set in `other` win.
    pub fn merge(&mut self, other: &Self) {
        if other.reject_past_dates.is_some() {
            self.reject_past_dates = other.reject_past_dates;
        }
        if other.maximum_lock_wait_seconds.is_some() {
            self.maximum_lock_wait_seconds = other.maximum_lock_wait_seconds;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if other.disable_autoinit.is_some() {
            self.disable_autoinit = other.disable_autoinit;
        }
    }

    /// Whether past start dates are refused. Off unless configured.
    #[must_use]
    pub fn rejects_past_dates(&self) -> bool {
        self.reject_past_dates.unwrap_or(false)
    }

    /// Lock wait in seconds, defaulting to [`DEFAULT_LOCK_WAIT_SECONDS`].
    #[must_use]
    pub fn lock_wait_seconds(&self) -> u64 {
        self.maximum_lock_wait_seconds
            .unwrap_or(DEFAULT_LOCK_WAIT_SECONDS)
    }

    /// Output format, defaulting to [`OutputFormat::Table`].
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Whether a missing data directory may be created.
    #[must_use]
    pub fn autoinit(&self) -> bool {
        !self.disable_autoinit.unwrap_or(false)
    }
}

/// Output format for listing commands.
///
/// # Examples
///
/// ```
/// use lodge::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// TSV output format.
    Tsv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            _ => Err(crate::Error::invalid(
                "output_format",
                format!("unknown format '{s}' (expected table, json, csv or tsv)"),
            )),
        }
    }
}
