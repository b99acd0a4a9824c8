//! Logging infrastructure for the lodge library.
//!
//! The library itself only emits records through the `log` facade. This
//! module provides the stderr backend the CLI installs, filtered by a
//! three-step [`LogLevel`].

use std::env;
use std::fmt;

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Logging level for controlling output verbosity.
///
/// # Examples
///
/// ```
/// use lodge::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all log output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Errors, warnings, info and debug messages.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use lodge::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("chatty").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// Returns the `log` facade filter for this level.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
        }
    }
}

/// A stderr logger writing `LEVEL: message` lines.
///
/// # Examples
///
/// ```
/// use lodge::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// assert!(logger.allows(log::Level::Warn));
/// assert!(!logger.allows(log::Level::Info));
/// ```
#[derive(Debug)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Returns whether records at `level` are written.
    #[must_use]
    pub fn allows(&self, level: Level) -> bool {
        level <= self.level.filter()
    }

    /// Registers this logger as the global `log` backend.
    ///
    /// Only the first call in a process takes effect.
    ///
    /// # Errors
    ///
    /// Returns an error if a global logger is already installed.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        let filter = self.level.filter();
        log::set_logger(Box::leak(Box::new(self)))?;
        log::set_max_level(filter);
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.allows(metadata.level())
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Initializes a logger based on CLI flags and `LODGE_LOG_MODE`.
///
/// The priority order is:
/// 1. CLI flags (verbose wins over quiet)
/// 2. `LODGE_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// # Examples
///
/// ```
/// use lodge::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
/// assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    if let Ok(env_value) = env::var("LODGE_LOG_MODE") {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return Logger::new(level);
        }
    }

    Logger::new(LogLevel::Normal)
}
