//! Git command runner and commit ingestion for libchange.
//!
//! Provides a wrapper around git commands with captured stdout/stderr and
//! structured error handling, plus the loaders that turn commits of a
//! repository into `Commit` values for analysis.

use crate::diff::{Commit, parse_changed_artifacts};
use crate::error::{LibChangeError, Result};
use log::debug;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns stdout lines as a vector.
    pub fn lines(&self) -> Vec<&str> {
        if self.stdout.is_empty() {
            Vec::new()
        } else {
            self.stdout.lines().collect()
        }
    }
}

fn execute<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<Output> {
    let output = Command::new("git")
        .current_dir(cwd.as_ref())
        .args(args)
        .output()
        .map_err(|e| {
            LibChangeError::GitError(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    if output.status.success() {
        return Ok(output);
    }

    let git_output = GitOutput::from_output(&output);
    let exit_code = output.status.code().unwrap_or(-1);
    let error_msg = if git_output.stderr.is_empty() {
        git_output.stdout
    } else {
        git_output.stderr
    };

    Err(LibChangeError::GitError(format!(
        "git {} failed (exit code {}): {}",
        args.first().unwrap_or(&""),
        exit_code,
        error_msg
    )))
}

/// Run a git command with the specified working directory.
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(LibChangeError::GitError)` - On non-zero exit code (mapped to exit code 3)
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let output = execute(cwd, args)?;
    Ok(GitOutput::from_output(&output))
}

/// Run a git command and return stdout untrimmed.
///
/// Diff output must keep the leading space of context lines and the
/// trailing whitespace of the last line.
pub fn run_git_raw<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<String> {
    let output = execute(cwd, args)?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
///
/// # Returns
///
/// * `Ok(PathBuf)` - The absolute path to the repository root
/// * `Err(LibChangeError::UserError)` - If not inside a git repository (exit code 1)
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    match run_git(cwd.as_ref(), &["rev-parse", "--show-toplevel"]) {
        Ok(output) => Ok(PathBuf::from(&output.stdout)),
        Err(LibChangeError::GitError(msg)) if msg.contains("not a git repository") => {
            Err(LibChangeError::UserError(format!(
                "'{}' is not inside a git repository",
                cwd.as_ref().display()
            )))
        }
        Err(err) => Err(err),
    }
}

/// Resolve a revision to a full commit SHA.
pub fn resolve_commit<P: AsRef<Path>>(repo: P, rev: &str) -> Result<String> {
    let target = format!("{}^{{commit}}", rev);
    let output = run_git(repo, &["rev-parse", "--verify", "--quiet", &target]).map_err(|_| {
        LibChangeError::GitError(format!("'{}' does not name a commit", rev))
    })?;
    Ok(output.stdout)
}

/// List the commits of a revision range (`a..b`), oldest first.
pub fn list_commits<P: AsRef<Path>>(repo: P, range: &str) -> Result<Vec<String>> {
    let output = run_git(repo, &["rev-list", "--reverse", range])?;
    Ok(output.lines().into_iter().map(str::to_string).collect())
}

/// Expand command-line revisions into commit ids.
///
/// Arguments containing `..` are ranges; anything else names one commit
/// and is passed through unresolved so a bad revision fails only that
/// commit's analysis.
pub fn expand_revisions<P: AsRef<Path>>(repo: P, revisions: &[String]) -> Result<Vec<String>> {
    let mut commits = Vec::new();
    for rev in revisions {
        if rev.contains("..") {
            let listed = list_commits(repo.as_ref(), rev)?;
            debug!("range {} expands to {} commits", rev, listed.len());
            commits.extend(listed);
        } else {
            commits.push(rev.clone());
        }
    }
    Ok(commits)
}

/// Load a commit and its changed files as diff-annotated artifacts.
///
/// Runs `git show` with `context_lines` of context so that each artifact
/// covers its whole file. Merge commits are diffed against their first
/// parent. Non-ASCII paths are emitted verbatim; names git still quotes
/// are decoded by the diff parser.
///
/// # Returns
///
/// * `Ok(Commit)` - The commit, identified by its full SHA
/// * `Err(LibChangeError::AnalysisError)` - The commit could not be resolved or its diff read
pub fn load_commit<P: AsRef<Path>>(repo: P, rev: &str, context_lines: u32) -> Result<Commit> {
    let to_analysis_error = |err: LibChangeError| LibChangeError::AnalysisError {
        commit: rev.to_string(),
        reason: err.to_string(),
    };

    let repo = repo.as_ref();
    let sha = resolve_commit(repo, rev).map_err(to_analysis_error)?;
    let unified = format!("--unified={}", context_lines);

    let diff = run_git_raw(
        repo,
        &[
            "-c",
            "core.quotePath=false",
            "show",
            "--format=",
            "--no-color",
            "--no-ext-diff",
            "--no-renames",
            "--src-prefix=a/",
            "--dst-prefix=b/",
            "--diff-merges=first-parent",
            &unified,
            &sha,
        ],
    )
    .map_err(to_analysis_error)?;

    let artifacts = parse_changed_artifacts(&diff).map_err(to_analysis_error)?;
    debug!("commit {} changed {} files", sha, artifacts.len());

    Ok(Commit::new(sha, artifacts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ChangeType;
    use crate::diff::LineMarker;
    use crate::test_support::{commit_file, create_test_repo};
    use tempfile::TempDir;

    const GRADLE_V1: &str = "apply plugin: 'java'\n\ndependencies {\n    implementation 'com.x:lib:1.0'\n    testImplementation 'junit:junit:4.12'\n}\n";
    const GRADLE_V2: &str = "apply plugin: 'java'\n\ndependencies {\n    implementation 'com.x:lib:2.0'\n    testImplementation 'junit:junit:4.12'\n}\n";

    #[test]
    fn test_run_git_captures_stdout() {
        let temp_dir = create_test_repo();
        let output = run_git(temp_dir.path(), &["rev-parse", "--show-toplevel"]).unwrap();
        assert!(!output.stdout.is_empty());
    }

    #[test]
    fn test_run_git_failure_returns_git_error() {
        let temp_dir = create_test_repo();
        let err = run_git(temp_dir.path(), &["checkout", "nonexistent-branch"]).unwrap_err();
        assert!(matches!(err, LibChangeError::GitError(_)));
    }

    #[test]
    fn test_get_repo_root_from_subdirectory() {
        let temp_dir = create_test_repo();
        let subdir = temp_dir.path().join("subdir").join("nested");
        std::fs::create_dir_all(&subdir).unwrap();

        let root = get_repo_root(&subdir).unwrap();

        let expected = temp_dir.path().canonicalize().unwrap();
        assert_eq!(root.canonicalize().unwrap(), expected);
    }

    #[test]
    fn test_get_repo_root_outside_repo_returns_user_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = get_repo_root(temp_dir.path()).unwrap_err();
        assert!(matches!(err, LibChangeError::UserError(_)));
        assert!(err.to_string().contains("not inside a git repository"));
    }

    #[test]
    fn test_resolve_unknown_revision() {
        let temp_dir = create_test_repo();
        let err = resolve_commit(temp_dir.path(), "no-such-branch").unwrap_err();
        assert!(err.to_string().contains("does not name a commit"));
    }

    #[test]
    fn test_list_commits_oldest_first() {
        let temp_dir = create_test_repo();
        let first = commit_file(temp_dir.path(), "build.gradle", GRADLE_V1, "Add build");
        let second = commit_file(temp_dir.path(), "build.gradle", GRADLE_V2, "Bump lib");

        let commits = list_commits(temp_dir.path(), "HEAD~2..HEAD").unwrap();

        assert_eq!(commits, vec![first, second]);
    }

    #[test]
    fn test_expand_revisions_mixes_ranges_and_single_revisions() {
        let temp_dir = create_test_repo();
        let first = commit_file(temp_dir.path(), "build.gradle", GRADLE_V1, "Add build");
        let second = commit_file(temp_dir.path(), "build.gradle", GRADLE_V2, "Bump lib");

        let revisions = vec!["HEAD~1..HEAD".to_string(), "HEAD~1".to_string()];
        let commits = expand_revisions(temp_dir.path(), &revisions).unwrap();

        assert_eq!(commits, vec![second, "HEAD~1".to_string()]);
        assert_ne!(first, commits[0]);
    }

    #[test]
    fn test_load_commit_reads_whole_file_with_markers() {
        let temp_dir = create_test_repo();
        commit_file(temp_dir.path(), "app/build.gradle", GRADLE_V1, "Add build");
        let sha = commit_file(temp_dir.path(), "app/build.gradle", GRADLE_V2, "Bump lib");

        let commit = load_commit(temp_dir.path(), "HEAD", 100_000).unwrap();

        assert_eq!(commit.id, sha);
        assert_eq!(commit.changed_artifacts.len(), 1);
        let artifact = &commit.changed_artifacts[0];
        assert_eq!(artifact.path, "app/build.gradle");
        assert_eq!(artifact.name, "build.gradle");

        let texts: Vec<&str> = artifact.content.iter().map(|l| l.text()).collect();
        assert_eq!(
            texts,
            vec![
                "apply plugin: 'java'",
                "",
                "dependencies {",
                "-    implementation 'com.x:lib:1.0'",
                "+    implementation 'com.x:lib:2.0'",
                "    testImplementation 'junit:junit:4.12'",
                "}",
            ]
        );
        assert_eq!(artifact.content[3].marker(), LineMarker::Removed);
    }

    #[test]
    fn test_load_commit_keeps_non_ascii_path() {
        let temp_dir = create_test_repo();
        commit_file(temp_dir.path(), "modül/build.gradle", GRADLE_V1, "Add build");
        commit_file(temp_dir.path(), "modül/build.gradle", GRADLE_V2, "Bump lib");

        let commit = load_commit(temp_dir.path(), "HEAD", 100_000).unwrap();

        assert_eq!(commit.changed_artifacts.len(), 1);
        let artifact = &commit.changed_artifacts[0];
        assert_eq!(artifact.path, "modül/build.gradle");

        let types: Vec<ChangeType> = crate::analysis::dependency_changes(&artifact.content)
            .iter()
            .map(|c| c.change_type())
            .collect();
        assert_eq!(types, vec![ChangeType::VersionChange, ChangeType::NoChange]);
    }

    #[test]
    fn test_load_commit_decodes_quoted_path() {
        let temp_dir = create_test_repo();
        commit_file(temp_dir.path(), "say \"hi\"/build.gradle", GRADLE_V1, "Add build");
        commit_file(temp_dir.path(), "say \"hi\"/build.gradle", GRADLE_V2, "Bump lib");

        let commit = load_commit(temp_dir.path(), "HEAD", 100_000).unwrap();

        assert_eq!(commit.changed_artifacts.len(), 1);
        assert_eq!(commit.changed_artifacts[0].path, "say \"hi\"/build.gradle");
    }

    #[test]
    fn test_load_unknown_commit_is_analysis_error() {
        let temp_dir = create_test_repo();
        let err = load_commit(temp_dir.path(), "deadbeef", 10).unwrap_err();
        match err {
            LibChangeError::AnalysisError { commit, reason } => {
                assert_eq!(commit, "deadbeef");
                assert!(reason.contains("does not name a commit"));
            }
            other => panic!("Expected AnalysisError, got {:?}", other),
        }
    }

    #[test]
    fn test_git_output_lines() {
        let output = GitOutput {
            stdout: "line1\nline2\nline3".to_string(),
            stderr: String::new(),
        };
        assert_eq!(output.lines(), vec!["line1", "line2", "line3"]);

        let empty = GitOutput {
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(empty.lines().is_empty());
    }
}
