//! Dependency extraction and diff pipeline.
//!
//! For one changed build file the pipeline runs:
//! 1. `reconstruct` twice, producing the pre- and post-commit lines
//! 2. `extract_block` on each version, isolating the `dependencies { }` interior
//! 3. `parse_declarations` on each interior, yielding dependency records
//! 4. `diff` on the two record sets, yielding classified change entries
//!
//! Every stage is a pure function over owned or borrowed input; nothing is
//! shared between invocations, so files and commits can be analyzed in
//! parallel by the caller.

mod block;
mod declaration;
mod engine;
mod filter;
mod types;


// Re-export public API
pub use block::extract_block;
pub use declaration::{parse_declaration, parse_declarations};
pub use engine::diff;
pub use filter::{Side, reconstruct};
pub use types::{BuildFileResult, ChangeEntry, ChangeType, CommitResult, DependencyRecord};

use crate::diff::DiffLine;

/// Parse the dependency records of one version of a diff-annotated file.
pub fn records_for_side(lines: &[DiffLine], side: Side) -> Vec<DependencyRecord> {
    let version = reconstruct(lines, side);
    let interior = extract_block(&version);
    parse_declarations(&interior)
}

/// Run the full pipeline over a diff-annotated file.
pub fn dependency_changes(lines: &[DiffLine]) -> Vec<ChangeEntry> {
    let before = records_for_side(lines, Side::Before);
    let after = records_for_side(lines, Side::After);
    diff(&before, &after)
}
