//! Checks actual output against stored snapshots

use crate::diff::DiffEngine;
use crate::snapshot::SnapshotManager;
use crate::{GoldenConfig, GoldenError, Result};

/// Outcome of a passing golden check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestResult {
    /// Output matched the snapshot
    Passed,
    /// Snapshot did not exist and was written
    Created,
    /// Snapshot differed and was overwritten
    Updated,
}

/// Runs golden checks for one snapshot directory
pub struct GoldenTestRunner {
    config: GoldenConfig,
    snapshots: SnapshotManager,
    diff_engine: DiffEngine,
}

impl GoldenTestRunner {
    pub fn new(config: GoldenConfig) -> Self {
        let snapshots = SnapshotManager::new(&config.snapshot_dir);
        let diff_engine = DiffEngine::new(config.diff_options.clone());
        Self {
            config,
            snapshots,
            diff_engine,
        }
    }

    /// Compare `actual` with the snapshot called `name`
    pub fn check(&self, name: &str, actual: &str) -> Result<TestResult> {
        if !self.snapshots.exists(name) {
            if self.config.create_missing {
                self.snapshots.save(name, actual)?;
                return Ok(TestResult::Created);
            }
            // Surfaces the missing-snapshot error with its path.
            self.snapshots.load(name)?;
        }

        let expected = self.snapshots.load(name)?;
        let result = self.diff_engine.compare(&expected, actual);
        if result.matches {
            return Ok(TestResult::Passed);
        }

        if self.config.update_snapshots {
            self.snapshots.save(name, actual)?;
            return Ok(TestResult::Updated);
        }

        Err(GoldenError::SnapshotMismatch(format!(
            "{} (+{} -{})\n{}",
            name, result.summary.added, result.summary.removed, result.diff_output
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DiffOptions;
    use std::path::Path;
    use tempfile::TempDir;

    fn config(dir: &Path, update: bool) -> GoldenConfig {
        GoldenConfig {
            snapshot_dir: dir.to_path_buf(),
            update_snapshots: update,
            create_missing: update,
            diff_options: DiffOptions {
                colored: false,
                ..DiffOptions::default()
            },
        }
    }

    #[test]
    fn test_pass_and_mismatch() {
        let dir = TempDir::new().unwrap();
        SnapshotManager::new(dir.path()).save("pr", "Title: x\n").unwrap();
        let runner = GoldenTestRunner::new(config(dir.path(), false));

        assert_eq!(runner.check("pr", "Title: x\n").unwrap(), TestResult::Passed);

        let err = runner.check("pr", "Title: y\n").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("pr (+1 -1)"));
        assert!(message.contains("-Title: x"));
        assert!(message.contains("+Title: y"));
    }

    #[test]
    fn test_missing_without_update_fails() {
        let dir = TempDir::new().unwrap();
        let runner = GoldenTestRunner::new(config(dir.path(), false));
        assert!(matches!(
            runner.check("absent", "x"),
            Err(GoldenError::SnapshotMissing(_))
        ));
    }

    #[test]
    fn test_update_mode_creates_and_overwrites() {
        let dir = TempDir::new().unwrap();
        let runner = GoldenTestRunner::new(config(dir.path(), true));

        assert_eq!(runner.check("spec", "one").unwrap(), TestResult::Created);
        assert_eq!(runner.check("spec", "two").unwrap(), TestResult::Updated);
        assert_eq!(runner.check("spec", "two").unwrap(), TestResult::Passed);
        assert_eq!(SnapshotManager::new(dir.path()).load("spec").unwrap(), "two");
    }
}
