//! Input types handed to the analysis core.

/// The change marker of a diff-annotated line, derived from its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMarker {
    /// `+`: present only after the commit.
    Added,
    /// `-`: present only before the commit.
    Removed,
    /// No marker: present in both versions.
    Context,
}

/// A single line of a changed file, possibly prefixed with a `+`/`-` marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    text: String,
}

impl DiffLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The raw line text, including any leading marker.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn marker(&self) -> LineMarker {
        if self.text.starts_with('+') {
            LineMarker::Added
        } else if self.text.starts_with('-') {
            LineMarker::Removed
        } else {
            LineMarker::Context
        }
    }
}

impl From<&str> for DiffLine {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for DiffLine {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// A file touched by a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedArtifact {
    /// File basename, used to pick the build-file dialect.
    pub name: String,
    /// Repository-relative path (forward slashes), used to label results.
    pub path: String,
    /// The file's content as diff-annotated lines.
    pub content: Vec<DiffLine>,
}

impl ChangedArtifact {
    /// Create an artifact; the name is the last path segment.
    pub fn new(path: impl Into<String>, content: Vec<DiffLine>) -> Self {
        let path = path.into();
        let name = path.rsplit('/').next().unwrap_or(&path).to_string();
        Self {
            name,
            path,
            content,
        }
    }

    /// Create an artifact from diff-annotated text, one `DiffLine` per line.
    pub fn from_annotated_text(path: impl Into<String>, text: &str) -> Self {
        Self::new(path, text.lines().map(DiffLine::from).collect())
    }
}

/// A commit: its identifier and the artifacts it changed, in diff order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub id: String,
    pub changed_artifacts: Vec<ChangedArtifact>,
}

impl Commit {
    pub fn new(id: impl Into<String>, changed_artifacts: Vec<ChangedArtifact>) -> Self {
        Self {
            id: id.into(),
            changed_artifacts,
        }
    }
}
