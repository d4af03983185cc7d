//! libchange: library-change analysis for build-file commits.
//!
//! This is the main entry point for the `libchange` CLI. It parses arguments,
//! sets up logging, dispatches to the command handler, and maps errors to
//! exit codes.

mod cli;
mod commands;

use cli::Cli;
use libchange::exit_codes;
use std::process::ExitCode;

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
