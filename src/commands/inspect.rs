//! The `inspect` command: analyze one diff-annotated build file.

use crate::cli::InspectArgs;
use libchange::analyzer::{BuildFileOutcome, analyze_build_file};
use libchange::diff::ChangedArtifact;
use libchange::error::{LibChangeError, Result};
use libchange::report::render_build_file;

pub fn cmd_inspect(args: InspectArgs) -> Result<()> {
    let text =
        std::fs::read_to_string(&args.file).map_err(|e| LibChangeError::io(&args.file, e))?;
    let label = args
        .path
        .unwrap_or_else(|| args.file.to_string_lossy().replace('\\', "/"));

    let artifact = ChangedArtifact::from_annotated_text(label, &text);

    match analyze_build_file(&artifact) {
        BuildFileOutcome::Analyzed(result) => {
            print!("{}", render_build_file(&result, args.format)?);
        }
        BuildFileOutcome::NoAnalyzer { path, dialect } => match dialect {
            Some(dialect) => eprintln!("no analyzer available for {} file {}", dialect, path),
            None => eprintln!("{} is not a recognized build file", path),
        },
    }

    Ok(())
}
