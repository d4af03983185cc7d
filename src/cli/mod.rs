//! CLI argument parsing for libchange.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use libchange::config::OutputFormat;
use std::path::PathBuf;

/// libchange: report library dependency changes made by commits.
///
/// For every changed Gradle build file, the dependencies declared in its
/// `dependencies { }` blocks before and after the commit are compared and
/// each library is classified as added, removed, version-changed,
/// replaced or unchanged.
#[derive(Parser, Debug)]
#[command(name = "libchange")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for libchange.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze commits of a git repository.
    ///
    /// Each argument is a revision or an `a..b` range. Results are printed,
    /// or written as `<commit><suffix>` files when an output directory is set.
    Analyze(AnalyzeArgs),

    /// Analyze one diff-annotated build file.
    ///
    /// The file holds one line per diff line: plain text for context,
    /// `+`/`-` prefixed lines for additions and removals.
    Inspect(InspectArgs),

    /// Show the effective configuration.
    Config(ConfigArgs),
}

/// Arguments for the `analyze` command.
#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Revisions or ranges to analyze (e.g. HEAD, v1.0..main).
    #[arg(required = true)]
    pub revisions: Vec<String>,

    /// Repository to read commits from.
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Config file (default: libchange.yaml in the repository root).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory for per-commit result files.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (overrides the configured one).
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `inspect` command.
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Diff-annotated file to analyze.
    pub file: PathBuf,

    /// Build-file path used for dialect detection and labeling
    /// (default: the file's own path).
    #[arg(long)]
    pub path: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `config` command.
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Repository whose libchange.yaml is used.
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Config file to load instead.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_analyze_with_range_and_options() {
        let cli = Cli::try_parse_from([
            "libchange", "-vv", "analyze", "v1..main", "HEAD", "--output", "out", "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        let Command::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.revisions, vec!["v1..main", "HEAD"]);
        assert_eq!(args.output, Some(PathBuf::from("out")));
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.repo, PathBuf::from("."));
    }

    #[test]
    fn analyze_requires_a_revision() {
        assert!(Cli::try_parse_from(["libchange", "analyze"]).is_err());
    }

    #[test]
    fn parse_inspect_defaults() {
        let cli = Cli::try_parse_from(["libchange", "inspect", "changes.diff"]).unwrap();
        let Command::Inspect(args) = cli.command else {
            panic!("expected inspect");
        };
        assert_eq!(args.file, PathBuf::from("changes.diff"));
        assert!(args.path.is_none());
        assert_eq!(args.format, OutputFormat::Text);
    }
}
