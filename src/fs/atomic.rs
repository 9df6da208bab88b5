//! Atomic config file writes.
//!
//! The content goes to `.{filename}.tmp` next to the target, is synced, and
//! is then renamed over the target, so a theme config is never observed
//! half-written. `std::fs::rename` replaces an existing file on both POSIX
//! and Windows; source and target share a directory, hence a filesystem.

use crate::error::{Result, ThemeError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Atomically write a string to a file, creating parent directories.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| ThemeError::io(parent, e))?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content.as_bytes())?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ThemeError::io(path, e)
    })?;

    debug!(path = %path.display(), bytes = content.len(), "wrote file atomically");
    Ok(())
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ThemeError::Usage(format!("invalid file path '{}'", target.display())))?;

    let parent = target.parent().unwrap_or(Path::new("."));
    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| ThemeError::io(path, e))?;

    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            ThemeError::io(path, e)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("theme.config.yaml");

        atomic_write_file(&file_path, "content: []\n").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "content: []\n");
    }

    #[test]
    fn test_atomic_write_replace_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("theme.config.yaml");
        fs::write(&file_path, "mode: all\n").unwrap();

        atomic_write_file(&file_path, "mode: incremental\n").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "mode: incremental\n");
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("frontend").join("theme.json");

        atomic_write_file(&file_path, "{}").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "{}");
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("theme.config.yaml");

        atomic_write_file(&file_path, "content: []\n").unwrap();

        assert!(!temp_dir.path().join(".theme.config.yaml.tmp").exists());
    }

    #[test]
    fn test_atomic_write_into_file_parent_fails_with_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let err = atomic_write_file(blocker.join("theme.yaml"), "content: []\n").unwrap_err();
        assert!(matches!(err, ThemeError::Io { .. }));
    }
}
