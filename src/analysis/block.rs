//! Isolation of the `dependencies { ... }` block interior.

use regex::Regex;
use std::sync::LazyLock;

static BLOCK_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*dependencies\s*\{\s*$").expect("block-start pattern is valid")
});

/// Extract the interior lines of every dependency block in `lines`.
///
/// A line containing `dependencies {` (with nothing but whitespace after
/// the brace) opens a block; the header itself contributes nothing. While
/// inside a block every line yields exactly one output string holding the
/// characters scanned before the block closed. Nested braces are kept, the
/// closing brace of the block is not, and anything after it on the same
/// line is discarded.
///
/// Several blocks in one file are concatenated into the same output.
/// Unbalanced input leaves the scanner inside the block at end of input;
/// everything scanned so far is still returned.
pub fn extract_block<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut interior = Vec::new();
    let mut depth: usize = 0;

    for line in lines {
        let line = line.as_ref();

        if depth == 0 {
            if BLOCK_START.is_match(line) {
                depth = 1;
            }
            continue;
        }

        let mut buffer = String::with_capacity(line.len());
        for c in line.chars() {
            match c {
                '{' => depth += 1,
                '}' => depth -= 1,
                _ => {}
            }
            if depth == 0 {
                break;
            }
            buffer.push(c);
        }
        interior.push(buffer);
    }

    interior
}
