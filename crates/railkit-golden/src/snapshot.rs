//! Snapshot files on disk

use crate::{GoldenError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Snapshot file extension
const SNAPSHOT_EXTENSION: &str = "txt";

/// Manages reading and writing text snapshots
pub struct SnapshotManager {
    snapshot_dir: PathBuf,
}

impl SnapshotManager {
    pub fn new(snapshot_dir: impl AsRef<Path>) -> Self {
        Self {
            snapshot_dir: snapshot_dir.as_ref().to_path_buf(),
        }
    }

    /// Load a snapshot exactly as stored
    pub fn load(&self, name: &str) -> Result<String> {
        let path = self.snapshot_path(name);

        if !path.exists() {
            return Err(GoldenError::SnapshotMissing(format!(
                "'{}' not found at {:?} (run with UPDATE_GOLDEN=1 to create it)",
                name, path
            )));
        }

        Ok(fs::read_to_string(path)?)
    }

    /// Write a snapshot, creating the directory if needed
    pub fn save(&self, name: &str, content: &str) -> Result<()> {
        let path = self.snapshot_path(name);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, content)?;
        Ok(())
    }

    pub fn exists(&self, name: &str) -> bool {
        self.snapshot_path(name).exists()
    }

    /// Names of all snapshots, sorted
    pub fn list(&self) -> Result<Vec<String>> {
        let mut snapshots = Vec::new();

        if !self.snapshot_dir.exists() {
            return Ok(snapshots);
        }

        for entry in fs::read_dir(&self.snapshot_dir)? {
            let path = entry?.path();

            if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(SNAPSHOT_EXTENSION) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    snapshots.push(stem.to_string());
                }
            }
        }

        snapshots.sort();
        Ok(snapshots)
    }

    fn snapshot_path(&self, name: &str) -> PathBuf {
        let suffix = format!(".{}", SNAPSHOT_EXTENSION);
        let filename = if name.ends_with(&suffix) {
            name.to_string()
        } else {
            format!("{}{}", name, suffix)
        };

        self.snapshot_dir.join(filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_load_preserves_bytes() {
        let dir = TempDir::new().unwrap();
        let manager = SnapshotManager::new(dir.path());

        let content = "\n<rail>\n  body  \n\n";
        manager.save("spec", content).unwrap();

        assert!(manager.exists("spec"));
        assert!(manager.exists("spec.txt"));
        assert_eq!(manager.load("spec").unwrap(), content);
    }

    #[test]
    fn test_missing_snapshot() {
        let dir = TempDir::new().unwrap();
        let manager = SnapshotManager::new(dir.path());

        let err = manager.load("absent").unwrap_err();
        assert!(matches!(err, GoldenError::SnapshotMissing(_)));
    }

    #[test]
    fn test_list_sorted() {
        let dir = TempDir::new().unwrap();
        let manager = SnapshotManager::new(dir.path().join("nested"));
        assert!(manager.list().unwrap().is_empty());

        manager.save("b", "2").unwrap();
        manager.save("a", "1").unwrap();
        std::fs::write(dir.path().join("nested").join("ignored.json"), "{}").unwrap();

        assert_eq!(manager.list().unwrap(), vec!["a".to_string(), "b".to_string()]);
    }
}
