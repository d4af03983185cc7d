//! Rendering and persistence of analysis results.
//!
//! Results are rendered as readable text or JSON. Per-commit results are
//! stored as `<commit id><suffix>` in an output directory.

use crate::analysis::{BuildFileResult, CommitResult};
use crate::config::OutputFormat;
use crate::error::{LibChangeError, Result};
use crate::fs::atomic_write_file;
use log::info;
use serde::Serialize;
use std::path::{Path, PathBuf};

fn render<T: Serialize + std::fmt::Display>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(value.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|e| LibChangeError::UserError(format!("failed to render JSON: {}", e))),
    }
}

/// Render a commit result.
pub fn render_commit(result: &CommitResult, format: OutputFormat) -> Result<String> {
    render(result, format)
}

/// Render a single build-file result.
pub fn render_build_file(result: &BuildFileResult, format: OutputFormat) -> Result<String> {
    render(result, format)
}

/// Path of the result file for a commit.
pub fn result_path(output_dir: &Path, commit_id: &str, suffix: &str) -> PathBuf {
    output_dir.join(format!("{}{}", commit_id, suffix))
}

/// Write a commit result to `<output_dir>/<commit id><suffix>`.
///
/// # Returns
///
/// * `Ok(PathBuf)` - The path written
/// * `Err(LibChangeError)` - Rendering or writing failed
pub fn write_commit_result(
    output_dir: &Path,
    result: &CommitResult,
    suffix: &str,
    format: OutputFormat,
) -> Result<PathBuf> {
    let path = result_path(output_dir, &result.commit_id, suffix);
    let content = render_commit(result, format)?;
    atomic_write_file(&path, &content)?;
    info!("wrote result for commit {} to {}", result.commit_id, path.display());
    Ok(path)
}
