//! The `analyze` command: analyze commits of a repository.

use crate::cli::AnalyzeArgs;
use libchange::batch::{BuildFileSelector, analyze_commits};
use libchange::config::Config;
use libchange::error::{LibChangeError, Result};
use libchange::git::{expand_revisions, get_repo_root, load_commit};
use libchange::report::{render_commit, write_commit_result};
use log::{error, info};

pub fn cmd_analyze(args: AnalyzeArgs) -> Result<()> {
    let repo_root = get_repo_root(&args.repo)?;
    let config = Config::discover(args.config.as_deref(), &repo_root)?;
    let selector = BuildFileSelector::from_config(&config)?;
    let format = args.format.unwrap_or(config.output_format);
    let output_dir = args.output.or_else(|| config.output_dir.clone());

    let revisions = expand_revisions(&repo_root, &args.revisions)?;
    info!(
        "analyzing {} commits in {}",
        revisions.len(),
        repo_root.display()
    );

    let commits = revisions
        .iter()
        .map(|rev| load_commit(&repo_root, rev, config.diff_context_lines));
    let report = analyze_commits(commits, &selector);

    let mut failed = report.failed.len();

    for result in &report.results {
        match &output_dir {
            Some(dir) => match write_commit_result(dir, result, &config.result_suffix, format) {
                Ok(path) => println!("{}", path.display()),
                Err(err) => {
                    error!(
                        "could not write result for commit {}: {}",
                        result.commit_id, err
                    );
                    failed += 1;
                }
            },
            None => print!("{}", render_commit(result, format)?),
        }
    }

    eprintln!("{}", report.summary());
    for failure in &report.failed {
        eprintln!("  {}: {}", failure.commit_id, failure.reason);
    }

    if failed > 0 {
        return Err(LibChangeError::BatchFailed { failed });
    }
    Ok(())
}
