//! Result model: dependency records, classified changes, and per-file and
//! per-commit results.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// One declared dependency at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyRecord {
    /// Dependency configuration name, e.g. `implementation`.
    pub scope: String,
    pub group: String,
    pub identifier: String,
    pub version: String,
}

impl DependencyRecord {
    pub fn new(
        scope: impl Into<String>,
        group: impl Into<String>,
        identifier: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            scope: scope.into(),
            group: group.into(),
            identifier: identifier.into(),
            version: version.into(),
        }
    }

    /// Identity key: `group:identifier`.
    pub fn key(&self) -> String {
        format!("{}:{}", self.group, self.identifier)
    }

    /// Same group and identifier.
    pub fn is_same_library(&self, other: &DependencyRecord) -> bool {
        self.group == other.group && self.identifier == other.identifier
    }

    /// Same library in a different version.
    pub fn is_same_library_in_different_version(&self, other: &DependencyRecord) -> bool {
        self.is_same_library(other) && self.version != other.version
    }
}

impl fmt::Display for DependencyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}:{}:{}'",
            self.scope, self.group, self.identifier, self.version
        )
    }
}

/// Classification of a change entry, derived from its two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeType {
    NoChange,
    VersionChange,
    Addition,
    Removal,
    Replacement,
}

impl ChangeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::NoChange => "NO_CHANGE",
            ChangeType::VersionChange => "VERSION_CHANGE",
            ChangeType::Addition => "ADDITION",
            ChangeType::Removal => "REMOVAL",
            ChangeType::Replacement => "REPLACEMENT",
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The pairing of a dependency's pre-commit and post-commit records.
///
/// At least one side is always present; the constructors make the
/// both-absent state unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEntry {
    previous: Option<DependencyRecord>,
    current: Option<DependencyRecord>,
}

impl ChangeEntry {
    /// A dependency that only exists after the commit.
    pub fn addition(current: DependencyRecord) -> Self {
        Self {
            previous: None,
            current: Some(current),
        }
    }

    /// A dependency that only existed before the commit.
    pub fn removal(previous: DependencyRecord) -> Self {
        Self {
            previous: Some(previous),
            current: None,
        }
    }

    /// A dependency present on both sides.
    pub fn paired(previous: DependencyRecord, current: DependencyRecord) -> Self {
        Self {
            previous: Some(previous),
            current: Some(current),
        }
    }

    /// Build an entry from optional sides; `None` when both are absent.
    pub fn from_parts(
        previous: Option<DependencyRecord>,
        current: Option<DependencyRecord>,
    ) -> Option<Self> {
        if previous.is_none() && current.is_none() {
            return None;
        }
        Some(Self { previous, current })
    }

    pub fn previous(&self) -> Option<&DependencyRecord> {
        self.previous.as_ref()
    }

    pub fn current(&self) -> Option<&DependencyRecord> {
        self.current.as_ref()
    }

    pub fn change_type(&self) -> ChangeType {
        match (&self.previous, &self.current) {
            (Some(previous), Some(current)) => {
                if previous == current {
                    ChangeType::NoChange
                } else if previous.is_same_library_in_different_version(current) {
                    ChangeType::VersionChange
                } else {
                    // Same key and version with a different scope lands here.
                    ChangeType::Replacement
                }
            }
            (Some(_), None) => ChangeType::Removal,
            (None, Some(_)) => ChangeType::Addition,
            (None, None) => unreachable!("change entry without previous and current record"),
        }
    }
}

impl Serialize for ChangeEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ChangeEntry", 3)?;
        state.serialize_field("previous", &self.previous)?;
        state.serialize_field("current", &self.current)?;
        state.serialize_field("change_type", &self.change_type())?;
        state.end()
    }
}

fn fmt_side(record: Option<&DependencyRecord>) -> String {
    record.map_or_else(|| "-".to_string(), DependencyRecord::to_string)
}

impl fmt::Display for ChangeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<14} previous: {}  current: {}",
            self.change_type().as_str(),
            fmt_side(self.previous()),
            fmt_side(self.current())
        )
    }
}

/// Classified changes found in one build file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildFileResult {
    pub build_file_path: String,
    pub changes: Vec<ChangeEntry>,
}

impl BuildFileResult {
    pub fn new(build_file_path: impl Into<String>, changes: Vec<ChangeEntry>) -> Self {
        Self {
            build_file_path: build_file_path.into(),
            changes,
        }
    }

    /// Changes other than `NO_CHANGE`.
    pub fn effective_changes(&self) -> impl Iterator<Item = &ChangeEntry> {
        self.changes
            .iter()
            .filter(|change| change.change_type() != ChangeType::NoChange)
    }
}

impl fmt::Display for BuildFileResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.build_file_path)?;
        if self.changes.is_empty() {
            return writeln!(f, "  (no dependencies found)");
        }
        for change in &self.changes {
            writeln!(f, "  {}", change)?;
        }
        Ok(())
    }
}

/// All build-file results of one commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitResult {
    pub commit_id: String,
    pub file_results: Vec<BuildFileResult>,
}

impl CommitResult {
    pub fn new(commit_id: impl Into<String>, file_results: Vec<BuildFileResult>) -> Self {
        Self {
            commit_id: commit_id.into(),
            file_results,
        }
    }
}

impl fmt::Display for CommitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "commit {}", self.commit_id)?;
        if self.file_results.is_empty() {
            return writeln!(f, "  (no build files changed)");
        }
        for result in &self.file_results {
            for line in result.to_string().lines() {
                writeln!(f, "  {}", line)?;
            }
        }
        Ok(())
    }
}
