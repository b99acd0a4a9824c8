//! Configuration file discovery and loading.
//!
//! The only configuration file is `config.yaml` in the data directory.

use crate::config::schema::Config;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file inside the data directory.
pub const CONFIG_FILE: &str = "config.yaml";

/// A configuration file that was found and parsed.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use lodge::config::ConfigLoader;
/// use std::path::Path;
///
/// if let Some(source) = ConfigLoader::load_from_data_dir(Path::new("/srv/lodge")).unwrap() {
///     println!("loaded {}", source.path.display());
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads `{data_dir}/config.yaml` if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from_data_dir(data_dir: &Path) -> Result<Option<ConfigSource>> {
        let path = data_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&path)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(Some(ConfigSource { path, config }))
    }

    /// Loads and parses a YAML configuration file.
    ///
    /// An empty file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a configuration
    /// error if the YAML is invalid or names unknown fields.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(&contents)?)
    }
}
