//! Atomic file writes.
//!
//! Content is written to `.{filename}.tmp` in the target directory, synced
//! to disk, then renamed over the target. Source and destination are on the
//! same filesystem, so the rename is atomic on POSIX.

use crate::error::{LibChangeError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write a string to a file, creating parent directories.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| LibChangeError::io(parent, e))?;
    }

    let temp_path = generate_temp_path(path)?;
    write_and_sync(&temp_path, content.as_bytes())?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LibChangeError::io(path, e)
    })?;

    Ok(())
}

/// Temporary file path in the same directory as the target.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            LibChangeError::UserError(format!("invalid file path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| LibChangeError::io(path, e))?;

    let written = file.write_all(content).and_then(|_| file.sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(path);
        return Err(LibChangeError::io(path, e));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("abc.changedlibs.result");

        atomic_write_file(&path, "commit abc\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "commit abc\n");
    }

    #[test]
    fn test_atomic_write_replaces_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("result.txt");
        fs::write(&path, "old").unwrap();

        atomic_write_file(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("results").join("nested").join("x.result");

        atomic_write_file(&path, "content").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("x.result");

        atomic_write_file(&path, "content").unwrap();

        assert!(!temp_dir.path().join(".x.result.tmp").exists());
    }

    #[test]
    fn test_generate_temp_path() {
        let temp = generate_temp_path(Path::new("/out/abc.result")).unwrap();
        assert_eq!(temp, PathBuf::from("/out/.abc.result.tmp"));
    }
}
