//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for library-change analysis.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Regex selecting build files; must match the whole lowercased path.
    #[serde(default = "default_build_files_regex")]
    pub build_files_regex: String,

    /// `--unified` context passed to `git show`.
    #[serde(default = "default_diff_context_lines")]
    pub diff_context_lines: u32,

    /// Suffix appended to the commit id to name result files.
    #[serde(default = "default_result_suffix")]
    pub result_suffix: String,

    /// Directory for result files; results are printed when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Rendering of results.
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            build_files_regex: default_build_files_regex(),
            diff_context_lines: default_diff_context_lines(),
            result_suffix: default_result_suffix(),
            output_dir: None,
            output_format: OutputFormat::default(),
        }
    }
}
