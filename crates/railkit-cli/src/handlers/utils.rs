//! Shared utilities for command handlers

use crate::error::{Error, ErrorContext, Result};
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Load a value tree from a JSON or YAML file, or from stdin when `path` is `-`
///
/// The parser is picked by extension; anything that is not `.yaml`/`.yml`
/// is read as JSON.
pub fn load_value_tree(path: &Path) -> Result<Value> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .with_context(|| "reading value tree from stdin".to_string())?;
        return serde_json::from_str(&content).map_err(|_| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "JSON".to_string(),
        });
    }

    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;

    if is_yaml(path) {
        serde_yaml::from_str(&content).map_err(|_| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "YAML".to_string(),
        })
    } else {
        serde_json::from_str(&content).map_err(|_| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "JSON".to_string(),
        })
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false)
}
