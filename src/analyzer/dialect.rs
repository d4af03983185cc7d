//! Supported build-file dialects.

use std::fmt;

/// A build-file format, identified by file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildFileDialect {
    /// `build.gradle`
    Gradle,
    /// `pom.xml` (recognized, not analyzed)
    Maven,
}

impl BuildFileDialect {
    /// Identify the dialect from an artifact's file name (case-insensitive).
    pub fn from_artifact_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("build.gradle") {
            Some(Self::Gradle)
        } else if name.eq_ignore_ascii_case("pom.xml") {
            Some(Self::Maven)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gradle => "gradle",
            Self::Maven => "maven",
        }
    }
}

impl fmt::Display for BuildFileDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
