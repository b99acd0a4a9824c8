//! Layered configuration assembly.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::schema::Config;
use crate::database::resolve_data_dir;
use crate::error::Result;

/// Builds a [`Config`] from the data-directory file, the environment and
/// programmatic overrides, in increasing precedence.
///
/// # Examples
///
/// ```
/// use lodge::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         reject_past_dates: Some(true),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
/// assert!(config.rejects_past_dates());
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads the file and environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `config.yaml` from `data_dir` instead of the resolved default.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl AsRef<Path>) -> Self {
        self.data_dir = Some(data_dir.as_ref().to_path_buf());
        self
    }

    /// Skips the configuration file.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips `LODGE_*` environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Applies `config` on top of every other layer.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        match &mut self.overrides {
            Some(existing) => existing.merge(&config),
            None => self.overrides = Some(config),
        }
        self
    }

    /// Assembles the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or an
    /// environment variable holds an invalid value.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            let data_dir = match self.data_dir {
                Some(dir) => dir,
                None => resolve_data_dir()?,
            };
            if let Some(source) = ConfigLoader::load_from_data_dir(&data_dir)? {
                config.merge(&source.config);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = &self.overrides {
            config.merge(overrides);
        }

        Ok(config)
    }
}
