//! Config loading, validation, and discovery.

use super::model::Config;
use crate::error::{LibChangeError, Result};
use log::debug;
use regex::Regex;
use std::path::Path;

/// Config file looked up in the repository root when none is given.
pub const CONFIG_FILE_NAME: &str = "libchange.yaml";

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(LibChangeError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            LibChangeError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the effective config.
    ///
    /// An explicit path must exist. Otherwise `libchange.yaml` in `search_dir`
    /// is used when present, and the defaults when not.
    pub fn discover(explicit: Option<&Path>, search_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            debug!("loading config from {}", path.display());
            return Self::load(path);
        }

        let candidate = search_dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            debug!("loading config from {}", candidate.display());
            return Self::load(candidate);
        }

        debug!("no config file found, using defaults");
        let config = Self::default();
        config.validate()?;
        Ok(config)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a mapping.
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                LibChangeError::ConfigError(format!("failed to parse config YAML: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            LibChangeError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `build_files_regex` must be non-empty and compile
    /// - `diff_context_lines` must be positive
    /// - `result_suffix` must be non-empty and free of path separators
    pub fn validate(&self) -> Result<()> {
        if self.build_files_regex.trim().is_empty() {
            return Err(LibChangeError::ConfigError(
                "build_files_regex must not be empty".to_string(),
            ));
        }

        Regex::new(&self.build_files_regex).map_err(|e| {
            LibChangeError::ConfigError(format!(
                "build_files_regex '{}' is invalid: {}",
                self.build_files_regex, e
            ))
        })?;

        if self.diff_context_lines == 0 {
            return Err(LibChangeError::ConfigError(
                "diff_context_lines must be greater than 0".to_string(),
            ));
        }

        if self.result_suffix.is_empty() {
            return Err(LibChangeError::ConfigError(
                "result_suffix must not be empty".to_string(),
            ));
        }

        if self.result_suffix.contains('/') || self.result_suffix.contains('\\') {
            return Err(LibChangeError::ConfigError(format!(
                "result_suffix must not contain path separators (found '{}')",
                self.result_suffix
            )));
        }

        Ok(())
    }
}
