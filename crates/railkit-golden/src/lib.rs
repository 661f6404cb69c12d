//! Golden test infrastructure for railkit
//!
//! Rail templates and rendered summaries are consumed by tools that diff
//! text, so they are pinned byte-for-byte as snapshot files. A mismatch fails
//! with a unified diff; setting `UPDATE_GOLDEN=1` rewrites the snapshots
//! instead.

pub mod diff;
pub mod runner;
pub mod snapshot;

use std::path::{Path, PathBuf};
use thiserror::Error;

pub use diff::{DiffEngine, DiffOptions, DiffResult, DiffSummary};
pub use runner::{GoldenTestRunner, TestResult};
pub use snapshot::SnapshotManager;

/// Golden test error types
#[derive(Debug, Error)]
pub enum GoldenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot mismatch: {0}")]
    SnapshotMismatch(String),

    #[error("Snapshot missing: {0}")]
    SnapshotMissing(String),
}

pub type Result<T> = std::result::Result<T, GoldenError>;

/// Configuration for golden tests
#[derive(Debug, Clone)]
pub struct GoldenConfig {
    /// Directory holding the snapshot files
    pub snapshot_dir: PathBuf,

    /// Whether to overwrite snapshots with the actual output
    pub update_snapshots: bool,

    /// Whether to create snapshots that do not exist yet
    pub create_missing: bool,

    /// Diff options
    pub diff_options: DiffOptions,
}

impl GoldenConfig {
    /// Config for `snapshot_dir`, honouring `UPDATE_GOLDEN` and `GOLDEN_NO_COLOR`
    pub fn new(snapshot_dir: impl AsRef<Path>) -> Self {
        let update_snapshots = env_flag("UPDATE_GOLDEN");
        let mut diff_options = DiffOptions::default();
        if env_flag("GOLDEN_NO_COLOR") {
            diff_options.colored = false;
        }

        Self {
            snapshot_dir: snapshot_dir.as_ref().to_path_buf(),
            update_snapshots,
            create_missing: update_snapshots,
            diff_options,
        }
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| v == "1" || v.to_lowercase() == "true")
        .unwrap_or(false)
}

/// Assert that `$actual` matches the snapshot `$name` under `$dir`
#[macro_export]
macro_rules! assert_golden {
    ($dir:expr, $name:expr, $actual:expr) => {{
        let config = $crate::GoldenConfig::new($dir);
        let runner = $crate::GoldenTestRunner::new(config);
        if let Err(e) = runner.check($name, &$actual) {
            panic!("Golden test '{}' failed: {}", $name, e);
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_points_at_dir() {
        let config = GoldenConfig::new("some/dir");
        assert_eq!(config.snapshot_dir, PathBuf::from("some/dir"));
        assert_eq!(config.create_missing, config.update_snapshots);
    }
}
