//! Reconstruction of one side of a diff-annotated file.

use crate::diff::{DiffLine, LineMarker};

/// Which temporal version of a file to reconstruct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Pre-commit state: `+` lines are dropped.
    Before,
    /// Post-commit state: `-` lines are dropped.
    After,
}

/// Reconstruct the lines of one version of the file.
///
/// Kept lines retain their original text, including a leading `+`/`-`
/// marker. Relative order is preserved.
pub fn reconstruct(lines: &[DiffLine], side: Side) -> Vec<String> {
    let dropped = match side {
        Side::Before => LineMarker::Added,
        Side::After => LineMarker::Removed,
    };

    lines
        .iter()
        .filter(|line| line.marker() != dropped)
        .map(|line| line.text().to_string())
        .collect()
}
