//! Commit analysis and the batch loop.

use log::{debug, error, info};
use serde::Serialize;

use super::selector::BuildFileSelector;
use crate::analysis::{BuildFileResult, CommitResult};
use crate::analyzer::{BuildFileOutcome, analyze_build_file};
use crate::diff::Commit;
use crate::error::{LibChangeError, Result};

/// Outcome of analyzing one commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Analyzed(CommitResult),
    /// The commit has an empty identifier.
    Skipped,
}

/// Analyze every build file changed by `commit`.
///
/// Artifacts whose path does not match `selector` are ignored. Build files
/// without an analyzer for their dialect contribute no result.
pub fn analyze_commit(commit: &Commit, selector: &BuildFileSelector) -> CommitOutcome {
    if commit.id.is_empty() {
        debug!("skipping commit with empty id");
        return CommitOutcome::Skipped;
    }

    let mut file_results: Vec<BuildFileResult> = Vec::new();

    for artifact in &commit.changed_artifacts {
        if !selector.matches(&artifact.path) {
            continue;
        }

        debug!("processing {} from commit {}", artifact.path, commit.id);

        match analyze_build_file(artifact) {
            BuildFileOutcome::Analyzed(result) => file_results.push(result),
            BuildFileOutcome::NoAnalyzer { path, dialect } => match dialect {
                Some(dialect) => info!(
                    "no analyzer for {} build file {} in commit {}",
                    dialect, path, commit.id
                ),
                None => debug!(
                    "{} matches the build-file pattern but has no known dialect",
                    path
                ),
            },
        }
    }

    CommitOutcome::Analyzed(CommitResult::new(commit.id.clone(), file_results))
}

/// A commit whose analysis was unsuccessful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedCommit {
    pub commit_id: String,
    pub reason: String,
}

impl FailedCommit {
    fn from_error(err: LibChangeError) -> Self {
        match err {
            LibChangeError::AnalysisError { commit, reason } => Self {
                commit_id: commit,
                reason,
            },
            other => Self {
                commit_id: "unknown".to_string(),
                reason: other.to_string(),
            },
        }
    }
}

/// Everything a batch run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub results: Vec<CommitResult>,
    pub skipped: usize,
    pub failed: Vec<FailedCommit>,
}

impl BatchReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Dependency changes other than `NO_CHANGE` across all results.
    pub fn change_count(&self) -> usize {
        self.results
            .iter()
            .flat_map(|result| &result.file_results)
            .map(|file| file.effective_changes().count())
            .sum()
    }

    /// One-line summary, e.g. `3 analyzed, 5 changes, 0 skipped, 1 failed`.
    pub fn summary(&self) -> String {
        format!(
            "{} analyzed, {} changes, {} skipped, {} failed",
            self.results.len(),
            self.change_count(),
            self.skipped,
            self.failed.len()
        )
    }
}

/// Analyze commits one at a time until the source is exhausted.
///
/// A commit that could not be loaded is logged with its id, recorded as
/// failed, and the loop continues with the next one.
pub fn analyze_commits<I>(commits: I, selector: &BuildFileSelector) -> BatchReport
where
    I: IntoIterator<Item = Result<Commit>>,
{
    let mut report = BatchReport::default();
    debug!("selecting build files matching {}", selector.pattern());

    for next in commits {
        let commit = match next {
            Ok(commit) => commit,
            Err(err) => {
                let failed = FailedCommit::from_error(err);
                error!(
                    "could not analyze commit {}: {}",
                    failed.commit_id, failed.reason
                );
                report.failed.push(failed);
                continue;
            }
        };

        debug!("analyzing commit {}", commit.id);

        match analyze_commit(&commit, selector) {
            CommitOutcome::Analyzed(result) => {
                debug!("analysis of commit {} successful", commit.id);
                report.results.push(result);
            }
            CommitOutcome::Skipped => report.skipped += 1,
        }
    }

    report
}
