//! Diff-annotated input for the analysis pipeline.
//!
//! A commit is modelled as a list of changed artifacts, each carrying its
//! content as diff-annotated lines: plain text for context, `+` for lines
//! added by the commit, `-` for lines it removed.
//!
//! This module provides:
//! - The input types (`DiffLine`, `ChangedArtifact`, `Commit`)
//! - Conversion of `git show` unified diff output into changed artifacts
//!   (context lines lose the leading space, markers are kept)

mod api;
mod helpers;
mod parser;


// Re-export public API
pub use api::{ChangedArtifact, Commit, DiffLine, LineMarker};
pub use parser::parse_changed_artifacts;
