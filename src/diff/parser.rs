//! Conversion of unified diff output into changed artifacts.

use crate::error::{LibChangeError, Result};

use super::api::{ChangedArtifact, DiffLine};
use super::helpers::{parse_diff_git_line, parse_file_header_path};

/// In-progress artifact while its diff section is being read.
struct Section {
    path: Option<String>,
    old_path: Option<String>,
    lines: Vec<DiffLine>,
    in_hunk: bool,
}

impl Section {
    fn new(path: Option<String>) -> Self {
        Self {
            path,
            old_path: None,
            lines: Vec::new(),
            in_hunk: false,
        }
    }

    fn finish(self) -> Option<ChangedArtifact> {
        let path = self.path.or(self.old_path)?;
        Some(ChangedArtifact::new(path, self.lines))
    }
}

/// Parse `git show`/`git diff` output into one artifact per file section.
///
/// Added (`+`) and removed (`-`) lines keep their marker; context lines
/// drop their single leading space so they become plain text. Headers and
/// "\ No newline at end of file" markers are skipped. With a large enough
/// `--unified` context the artifact content covers the whole file.
///
/// # Returns
///
/// * `Ok(Vec<ChangedArtifact>)` - Artifacts in diff order
/// * `Err(LibChangeError::UserError)` - Hunk content appeared before any file header
pub fn parse_changed_artifacts(diff_output: &str) -> Result<Vec<ChangedArtifact>> {
    let mut artifacts = Vec::new();
    let mut current: Option<Section> = None;

    for (index, line) in diff_output.lines().enumerate() {
        if let Some(rest) = line.strip_prefix("diff --git ") {
            if let Some(section) = current.take().and_then(Section::finish) {
                artifacts.push(section);
            }
            current = Some(Section::new(parse_diff_git_line(rest)));
            continue;
        }

        let Some(section) = current.as_mut() else {
            if line.starts_with("@@") {
                return Err(LibChangeError::UserError(format!(
                    "malformed diff: hunk at line {} precedes any file header",
                    index + 1
                )));
            }
            // Commit headers or blank lines before the first section.
            continue;
        };

        if line.starts_with("@@") {
            section.in_hunk = true;
            continue;
        }

        if !section.in_hunk {
            if let Some(rest) = line.strip_prefix("--- ") {
                section.old_path = parse_file_header_path(rest, "a/");
            } else if let Some(rest) = line.strip_prefix("+++ ") {
                if let Some(path) = parse_file_header_path(rest, "b/") {
                    section.path = Some(path);
                } else {
                    // Deleted file: label it with its old path.
                    section.path = section.old_path.clone();
                }
            }
            // index, mode, rename and "Binary files" lines carry no content.
            continue;
        }

        if line.starts_with('+') || line.starts_with('-') {
            section.lines.push(DiffLine::new(line));
        } else if let Some(context) = line.strip_prefix(' ') {
            section.lines.push(DiffLine::new(context));
        } else if line.is_empty() {
            // Some tools strip the space of empty context lines.
            section.lines.push(DiffLine::new(""));
        }
        // "\ No newline at end of file" and anything else is ignored.
    }

    if let Some(section) = current.and_then(Section::finish) {
        artifacts.push(section);
    }

    Ok(artifacts)
}
