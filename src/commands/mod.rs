//! Command implementations for libchange.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod analyze;
mod inspect;

use crate::cli::{Command, ConfigArgs};
use libchange::config::Config;
use libchange::error::Result;
use libchange::git::get_repo_root;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Analyze(args) => analyze::cmd_analyze(args),
        Command::Inspect(args) => inspect::cmd_inspect(args),
        Command::Config(args) => cmd_config(args),
    }
}

/// Print the effective configuration as YAML.
fn cmd_config(args: ConfigArgs) -> Result<()> {
    let search_dir = match args.config {
        Some(_) => args.repo.clone(),
        None => get_repo_root(&args.repo)?,
    };
    let config = Config::discover(args.config.as_deref(), &search_dir)?;
    print!("{}", config.to_yaml()?);
    Ok(())
}
