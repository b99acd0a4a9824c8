//! Configuration system for lodge.
//!
//! Configuration is merged from several sources with the following
//! precedence (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`LODGE_*`)
//! 3. The data-directory file (`~/.lodge/config.yaml`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use lodge::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("lock wait: {}s", config.lock_wait_seconds());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, CONFIG_FILE};
pub use schema::{Config, OutputFormat, DEFAULT_LOCK_WAIT_SECONDS};
