//! Environment variable handling for configuration overrides.
//!
//! Recognized variables:
//!
//! | Variable | Field |
//! |---|---|
//! | `LODGE_REJECT_PAST_DATES` | `reject_past_dates` |
//! | `LODGE_MAXIMUM_LOCK_WAIT_SECONDS` | `maximum_lock_wait_seconds` |
//! | `LODGE_OUTPUT_FORMAT` | `output_format` |
//! | `LODGE_DISABLE_AUTOINIT` | `disable_autoinit` |

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use lodge::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Applies `LODGE_*` environment variables on top of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] naming the variable if a value does
    /// not parse.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var("LODGE_REJECT_PAST_DATES") {
            config.reject_past_dates = Some(Self::parse_bool("LODGE_REJECT_PAST_DATES", &val)?);
        }

        if let Ok(seconds) = env::var("LODGE_MAXIMUM_LOCK_WAIT_SECONDS") {
            config.maximum_lock_wait_seconds = Some(seconds.trim().parse().map_err(|_| {
                Error::invalid(
                    "LODGE_MAXIMUM_LOCK_WAIT_SECONDS",
                    "must be a non-negative integer",
                )
            })?);
        }

        if let Ok(format) = env::var("LODGE_OUTPUT_FORMAT") {
            config.output_format = Some(format.parse().map_err(|_| {
                Error::invalid(
                    "LODGE_OUTPUT_FORMAT",
                    format!("unknown format '{format}' (expected table, json, csv or tsv)"),
                )
            })?);
        }

        if let Ok(val) = env::var("LODGE_DISABLE_AUTOINIT") {
            config.disable_autoinit = Some(Self::parse_bool("LODGE_DISABLE_AUTOINIT", &val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::invalid(
                field,
                format!("invalid boolean value '{s}' (expected true/false/1/0/yes/no/on/off)"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use serial_test::serial;

    const VARS: [&str; 4] = [
        "LODGE_REJECT_PAST_DATES",
        "LODGE_MAXIMUM_LOCK_WAIT_SECONDS",
        "LODGE_OUTPUT_FORMAT",
        "LODGE_DISABLE_AUTOINIT",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_parse_bool_variants() {
        for yes in ["true", "TRUE", "1", "yes", "On"] {
            assert!(EnvironmentConfig::parse_bool("test", yes).unwrap());
        }
        for no in ["false", "0", "NO", "off"] {
            assert!(!EnvironmentConfig::parse_bool("test", no).unwrap());
        }
        assert!(EnvironmentConfig::parse_bool("test", "maybe").is_err());
    }

    #[test]
    #[serial]
    fn test_no_variables_leaves_config_untouched() {
        clear_env();
        let mut config = Config {
            reject_past_dates: Some(true),
            ..Default::default()
        };
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.reject_past_dates, Some(true));
        assert_eq!(config.maximum_lock_wait_seconds, None);
    }

    #[test]
    #[serial]
    fn test_all_variables_applied() {
        clear_env();
        env::set_var("LODGE_REJECT_PAST_DATES", "yes");
        env::set_var("LODGE_MAXIMUM_LOCK_WAIT_SECONDS", "9");
        env::set_var("LODGE_OUTPUT_FORMAT", "json");
        env::set_var("LODGE_DISABLE_AUTOINIT", "1");

        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        clear_env();

        assert_eq!(config.reject_past_dates, Some(true));
        assert_eq!(config.maximum_lock_wait_seconds, Some(9));
        assert_eq!(config.output_format, Some(OutputFormat::Json));
        assert_eq!(config.disable_autoinit, Some(true));
    }

    #[test]
    #[serial]
    fn test_invalid_lock_wait_names_variable() {
        clear_env();
        env::set_var("LODGE_MAXIMUM_LOCK_WAIT_SECONDS", "soon");

        let err = EnvironmentConfig::apply_overrides(&mut Config::default()).unwrap_err();
        clear_env();

        assert!(
            matches!(err, Error::InvalidInput { ref field, .. } if field == "LODGE_MAXIMUM_LOCK_WAIT_SECONDS")
        );
    }

    #[test]
    #[serial]
    fn test_invalid_output_format() {
        clear_env();
        env::set_var("LODGE_OUTPUT_FORMAT", "xml");

        let result = EnvironmentConfig::apply_overrides(&mut Config::default());
        clear_env();

        assert!(result.is_err());
    }
}
