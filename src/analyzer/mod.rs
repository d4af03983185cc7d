//! Build-file dialect dispatch.
//!
//! Each changed build file is routed to the analyzer of its dialect by
//! artifact name. Gradle is analyzed; Maven is recognized but has no
//! analyzer; anything else has no dialect at all. A missing analyzer is an
//! explicit outcome, never a failure.

mod dialect;
mod gradle;


// Re-export public API
pub use dialect::BuildFileDialect;
pub use gradle::GradleAnalyzer;

use crate::analysis::BuildFileResult;
use log::debug;
use crate::diff::ChangedArtifact;

/// Analyzes the dependency changes of one build-file dialect.
pub trait BuildFileAnalyzer: Send + Sync {
    fn dialect(&self) -> BuildFileDialect;

    fn analyze(&self, artifact: &ChangedArtifact) -> BuildFileResult;
}

static GRADLE: GradleAnalyzer = GradleAnalyzer;

/// Result of looking up an analyzer for an artifact.
pub enum AnalyzerLookup {
    Available(&'static dyn BuildFileAnalyzer),
    /// The dialect is known but not implemented (`Some`), or unknown (`None`).
    NoAnalyzer(Option<BuildFileDialect>),
}

/// Select the analyzer for an artifact by its file name.
pub fn analyzer_for(artifact: &ChangedArtifact) -> AnalyzerLookup {
    match BuildFileDialect::from_artifact_name(&artifact.name) {
        Some(BuildFileDialect::Gradle) => AnalyzerLookup::Available(&GRADLE),
        other => AnalyzerLookup::NoAnalyzer(other),
    }
}

/// Outcome of analyzing one changed build file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildFileOutcome {
    Analyzed(BuildFileResult),
    NoAnalyzer {
        path: String,
        dialect: Option<BuildFileDialect>,
    },
}

/// Analyze a build file with the analyzer of its dialect, if there is one.
pub fn analyze_build_file(artifact: &ChangedArtifact) -> BuildFileOutcome {
    match analyzer_for(artifact) {
        AnalyzerLookup::Available(analyzer) => {
            debug!("analyzing {} as {}", artifact.path, analyzer.dialect());
            BuildFileOutcome::Analyzed(analyzer.analyze(artifact))
        }
        AnalyzerLookup::NoAnalyzer(dialect) => BuildFileOutcome::NoAnalyzer {
            path: artifact.path.clone(),
            dialect,
        },
    }
}
