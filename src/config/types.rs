//! Configuration types and defaults for libchange.

use serde::{Deserialize, Serialize};

/// Rendering used for analysis results.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable, one change per line.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Build files eligible for analysis, matched against the lowercased path.
pub fn default_build_files_regex() -> String {
    r"(.*/)?(build\.gradle|pom\.xml)".to_string()
}

/// Context lines requested from git; large enough to cover whole files.
pub fn default_diff_context_lines() -> u32 {
    100_000
}

/// Suffix of per-commit result files.
pub fn default_result_suffix() -> String {
    ".changedlibs.result".to_string()
}
