//! Helper functions for diff parsing.

/// Parse the file path from a "diff --git" line.
///
/// Handles various formats:
/// - "a/path/to/file b/path/to/file" (normal)
/// - "a/path/to/file b/path/to/renamed" (rename)
/// - "\"a/mod\\303\\274l/file\" \"b/mod\\303\\274l/file\"" (C-quoted)
///
/// Returns the "b/" path (new file path), or None if parsing fails.
pub(super) fn parse_diff_git_line(rest: &str) -> Option<String> {
    if rest.ends_with('"')
        && let Some(quote_pos) = rest.rfind(" \"b/")
    {
        let unquoted = unquote_c_path(&rest[quote_pos + 1..])?;
        return unquoted.strip_prefix("b/").map(normalize_path);
    }

    // Paths can contain spaces: take the last " b/" as the separator.
    if let Some(b_pos) = rest.rfind(" b/") {
        let b_path = &rest[b_pos + 3..];
        return Some(normalize_path(b_path));
    }

    let parts: Vec<&str> = rest.split_whitespace().collect();
    if parts.len() >= 2 {
        let b_part = parts[parts.len() - 1];
        if let Some(path) = b_part.strip_prefix("b/") {
            return Some(normalize_path(path));
        }
    }

    None
}

/// Parse the path of a "--- a/path" or "+++ b/path" file header.
///
/// Accepts C-quoted paths and the trailing tab git appends to names with
/// spaces. Returns None for "/dev/null" (file created or deleted).
pub(super) fn parse_file_header_path(rest: &str, prefix: &str) -> Option<String> {
    let rest = rest.trim_end_matches('\t');
    if rest == "/dev/null" {
        return None;
    }
    if rest.starts_with('"') {
        let unquoted = unquote_c_path(rest)?;
        return unquoted.strip_prefix(prefix).map(normalize_path);
    }
    rest.strip_prefix(prefix).map(normalize_path)
}

/// Decode a path quoted the way git quotes names (`core.quotePath`).
///
/// The input must start and end with `"`. Octal escapes are raw bytes and
/// are decoded as UTF-8 (lossily). Returns None when the quoting is malformed.
pub(super) fn unquote_c_path(quoted: &str) -> Option<String> {
    let inner = quoted.strip_prefix('"')?.strip_suffix('"')?;
    let mut bytes = Vec::with_capacity(inner.len());
    let mut chars = inner.bytes().peekable();

    while let Some(b) = chars.next() {
        if b != b'\\' {
            bytes.push(b);
            continue;
        }
        let escaped = chars.next()?;
        let decoded = match escaped {
            b'a' => 0x07,
            b'b' => 0x08,
            b't' => b'\t',
            b'n' => b'\n',
            b'v' => 0x0b,
            b'f' => 0x0c,
            b'r' => b'\r',
            b'"' => b'"',
            b'\\' => b'\\',
            b'0'..=b'7' => {
                let mut value = u32::from(escaped - b'0');
                for _ in 0..2 {
                    let digit = chars.next_if(|d| (b'0'..=b'7').contains(d))?;
                    value = value * 8 + u32::from(digit - b'0');
                }
                u8::try_from(value).ok()?
            }
            _ => return None,
        };
        bytes.push(decoded);
    }

    Some(String::from_utf8_lossy(&bytes).into_owned())
}

/// Normalize a file path to use forward slashes.
pub(super) fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
