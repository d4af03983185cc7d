//! Commit-level analysis and the batch driver.
//!
//! - `BuildFileSelector`: which changed artifacts are build files
//! - `analyze_commit`: one commit into a `CommitResult`, or skipped
//! - `analyze_commits`: a stream of commits into a `BatchReport`, isolating
//!   per-commit faults so one bad commit never aborts the batch

mod commit;
mod selector;


// Re-export public API
pub use commit::{BatchReport, CommitOutcome, FailedCommit, analyze_commit, analyze_commits};
pub use selector::BuildFileSelector;
