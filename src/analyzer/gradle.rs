//! Gradle build script analyzer.

use log::debug;

use super::{BuildFileAnalyzer, BuildFileDialect};
use crate::analysis::{BuildFileResult, dependency_changes};
use crate::diff::ChangedArtifact;

/// Reports changes to the single-quoted `scope 'group:name:version'`
/// declarations inside `dependencies { }` blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct GradleAnalyzer;

impl BuildFileAnalyzer for GradleAnalyzer {
    fn dialect(&self) -> BuildFileDialect {
        BuildFileDialect::Gradle
    }

    fn analyze(&self, artifact: &ChangedArtifact) -> BuildFileResult {
        let changes = dependency_changes(&artifact.content);
        debug!(
            "{}: {} dependency entries from {} lines",
            artifact.path,
            changes.len(),
            artifact.content.len()
        );
        BuildFileResult::new(artifact.path.clone(), changes)
    }
}
