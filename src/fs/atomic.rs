//! Atomic file writes for persisted parameter sets.
//!
//! Content is written to `.{filename}.tmp` next to the target, synced, and
//! then renamed over the target. A reader never observes a half-written set.
//! Source and destination must be on the same filesystem for the rename to
//! be atomic; a crash may leave the temporary file behind.

use crate::error::{ParamsError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating parent directories as needed.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| ParamsError::storage(parent, e))?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ParamsError::storage(path, e)
    })?;

    // Persist the directory entry too.
    if let Some(parent) = path.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

/// Atomically create a file, failing if `path` already exists.
///
/// The temp file is hard-linked into place, which fails with
/// `AlreadyExists` instead of replacing an existing target.
pub fn atomic_write_new<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| ParamsError::storage(parent, e))?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;

    let linked = fs::hard_link(&temp_path, path);
    let _ = fs::remove_file(&temp_path);
    linked.map_err(|e| ParamsError::storage(path, e))
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            ParamsError::UserError(format!("invalid file path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| ParamsError::storage(path, e))?;

    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            ParamsError::storage(path, e)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("set.yaml");

        atomic_write(&file_path, b"name: mysql\n").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "name: mysql\n");
    }

    #[test]
    fn test_atomic_write_replaces_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("set.yaml");
        fs::write(&file_path, "name: old\n").unwrap();

        atomic_write_file(&file_path, "name: new\n").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "name: new\n");
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("parameters").join("set.yaml");

        atomic_write_file(&file_path, "name: nested\n").unwrap();

        assert!(file_path.exists());
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("set.yaml");

        atomic_write_file(&file_path, "name: clean\n").unwrap();

        assert!(!temp_dir.path().join(".set.yaml.tmp").exists());
    }

    #[test]
    fn test_atomic_write_new_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("parameters").join("set.yaml");

        atomic_write_new(&file_path, b"name: fresh\n").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "name: fresh\n");
        assert!(!file_path.with_file_name(".set.yaml.tmp").exists());
    }

    #[test]
    fn test_atomic_write_new_keeps_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("set.yaml");
        fs::write(&file_path, "name: first\n").unwrap();

        let err = atomic_write_new(&file_path, b"name: second\n").unwrap_err();

        match err {
            ParamsError::Storage { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::AlreadyExists)
            }
            other => panic!("expected Storage, got {:?}", other),
        }
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "name: first\n");
        assert!(!temp_dir.path().join(".set.yaml.tmp").exists());
    }

    #[test]
    fn test_atomic_write_into_file_parent_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let err = atomic_write_file(blocker.join("set.yaml"), "x").unwrap_err();
        assert!(matches!(err, ParamsError::Storage { .. }));
    }
}
