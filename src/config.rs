//! Runtime configuration.
//!
//! Values are layered, lowest precedence first: built-in defaults, an
//! optional YAML file, `SMART_TODO_*` environment variables, then command
//! line flags (applied by the caller).
//!
//! ```yaml
//! days_worked: 7
//! log_filter: warn
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Env var naming a YAML config file.
pub const CONFIG_PATH_ENV: &str = "SMART_TODO_CONFIG";
/// Env var overriding [`Config::days_worked`].
pub const DAYS_WORKED_ENV: &str = "SMART_TODO_DAYS_WORKED";
/// Env var overriding [`Config::log_filter`].
pub const LOG_FILTER_ENV: &str = "SMART_TODO_LOG";

/// Errors raised while assembling the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid YAML for [`Config`].
    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        /// File that was parsed.
        path: PathBuf,
        /// Underlying YAML error.
        source: serde_yaml::Error,
    },

    /// An environment variable held a value of the wrong shape.
    #[error("Invalid value {value:?} for {name}")]
    InvalidEnv {
        /// Variable name.
        name: &'static str,
        /// Raw value.
        value: String,
    },
}

/// Settings for one program run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Working days elapsed, used as the denominator of the completion rate.
    pub days_worked: u32,
    /// `tracing` filter directive for diagnostics on stderr.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            days_worked: 7,
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Loads defaults, then `path` (or the file named by
    /// `SMART_TODO_CONFIG`), then the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a named config file cannot be read or parsed, or
    /// if an environment override is malformed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(path, |name| std::env::var(name).ok())
    }

    /// Same as [`Config::load`] with an explicit environment lookup.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = path
            .map(Path::to_path_buf)
            .or_else(|| lookup(CONFIG_PATH_ENV).map(PathBuf::from));
        let mut config = match file {
            Some(path) => Self::from_yaml_file(&path)?,
            None => Self::default(),
        };
        config.apply_env(lookup)?;
        Ok(config)
    }

    /// Reads a YAML config file. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::from_yaml_str(&content)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// Parses YAML config text. An empty document yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns the YAML error for malformed input or unknown keys.
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Overrides fields from `SMART_TODO_*` variables found by `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] if `SMART_TODO_DAYS_WORKED` is
    /// not a non-negative integer.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(DAYS_WORKED_ENV) {
            self.days_worked = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEnv { name: DAYS_WORKED_ENV, value })?;
        }
        if let Some(value) = lookup(LOG_FILTER_ENV) {
            self.log_filter = value;
        }
        Ok(())
    }
}
