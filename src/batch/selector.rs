//! Build-file selection by path pattern.

use crate::config::Config;
use crate::error::{LibChangeError, Result};
use regex::Regex;

/// Compiled build-file pattern.
///
/// The pattern must match the whole lowercased artifact path.
#[derive(Debug, Clone)]
pub struct BuildFileSelector {
    regex: Regex,
    pattern: String,
}

impl BuildFileSelector {
    /// Compile a build-file pattern.
    ///
    /// # Returns
    ///
    /// * `Ok(BuildFileSelector)` - Successfully compiled pattern
    /// * `Err(LibChangeError::ConfigError)` - The pattern is empty or invalid
    pub fn new(pattern: &str) -> Result<Self> {
        if pattern.trim().is_empty() {
            return Err(LibChangeError::ConfigError(
                "build_files_regex must not be empty".to_string(),
            ));
        }

        let regex = Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| {
            LibChangeError::ConfigError(format!(
                "build_files_regex '{}' is invalid: {}",
                pattern, e
            ))
        })?;

        Ok(Self {
            regex,
            pattern: pattern.to_string(),
        })
    }

    /// Compile the pattern configured in `build_files_regex`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.build_files_regex)
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether the artifact at `path` is a build file.
    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(&path.to_lowercase())
    }
}
