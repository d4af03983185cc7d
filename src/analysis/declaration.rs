//! Parsing of dependency declarations inside a block.

use regex::Regex;
use std::sync::LazyLock;

use super::types::DependencyRecord;

/// `scope 'group:identifier:version'`, searched anywhere in the line.
///
/// The `regex` engine runs in linear time, so long quoted strings or runs
/// of whitespace cannot cause backtracking blow-up.
static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\s*(?P<scope>\w+)\s+'(?P<group>[^:\s']+):(?P<identifier>[^:\s']+):(?P<version>[^:\s']+)'",
    )
    .expect("declaration pattern is valid")
});

/// Parse one record per line that contains a single-quoted
/// `group:identifier:version` declaration.
///
/// Lines without such a declaration are skipped silently; map-style and
/// multi-line declarations are not recognized.
pub fn parse_declarations<S: AsRef<str>>(block_lines: &[S]) -> Vec<DependencyRecord> {
    block_lines
        .iter()
        .filter_map(|line| parse_declaration(line.as_ref()))
        .collect()
}

/// Parse a single line, if it holds a declaration.
pub fn parse_declaration(line: &str) -> Option<DependencyRecord> {
    let caps = DECLARATION.captures(line)?;
    Some(DependencyRecord::new(
        &caps["scope"],
        &caps["group"],
        &caps["identifier"],
        &caps["version"],
    ))
}
