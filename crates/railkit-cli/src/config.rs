//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (YAML/JSON/TOML)
//! - Environment variables
//!
//! Command-line flags are applied on top by the caller.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Base name used for configuration files
const CONFIG_STEM: &str = "railkit";

/// Extensions probed at each search location, in order
const CONFIG_EXTENSIONS: [&str; 4] = ["yaml", "yml", "json", "toml"];

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,

    /// File this configuration was read from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format (human, json, json-pretty, yaml)
    pub format: String,

    /// Use colored output by default
    pub color: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when no -v flag is given (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (compact, full, json)
    pub format: String,

    /// Include thread IDs
    pub thread_ids: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "human".to_string(),
            color: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "compact".to_string(),
            thread_ids: false,
        }
    }
}

impl Config {
    /// Load configuration from a file, choosing the parser by extension
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;

        let mut config: Config = match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            Some("json") => serde_json::from_str(&content)?,
            _ => {
                return Err(Error::InvalidFormat {
                    path: path.to_path_buf(),
                    expected: "yaml, json or toml".to_string(),
                })
            }
        };

        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Load configuration from default locations
    ///
    /// The first readable file wins. A file that exists but fails to parse is
    /// reported and skipped.
    pub fn load() -> Result<Self> {
        for path in Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        let mut config = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::load()?,
        };
        config.apply_env();
        Ok(config)
    }

    /// Apply `RAILKIT_OUTPUT` and `RAILKIT_LOG_LEVEL` overrides
    fn apply_env(&mut self) {
        if let Ok(format) = std::env::var("RAILKIT_OUTPUT") {
            self.output.format = format;
        }
        if let Ok(level) = std::env::var("RAILKIT_LOG_LEVEL") {
            self.logging.level = level;
        }
    }

    /// Configuration file paths checked by [`Config::load`], in order
    pub fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // Current directory
        for ext in CONFIG_EXTENSIONS {
            paths.push(PathBuf::from(format!(".{}.{}", CONFIG_STEM, ext)));
        }

        // User config directory
        if let Some(config_dir) = dirs::config_dir() {
            let railkit_dir = config_dir.join(CONFIG_STEM);
            for ext in CONFIG_EXTENSIONS {
                paths.push(railkit_dir.join(format!("config.{}", ext)));
            }
        }

        // Home directory
        if let Some(home_dir) = dirs::home_dir() {
            for ext in CONFIG_EXTENSIONS {
                paths.push(home_dir.join(format!(".{}.{}", CONFIG_STEM, ext)));
            }
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.output.format, "human");
        assert!(config.output.color);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "compact");
        assert_eq!(config.source, None);
    }

    #[test]
    fn test_from_yaml_fills_missing_sections() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "output:\n  format: json\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.output.format, "json");
        assert!(config.output.color);
        assert_eq!(config.logging, LoggingConfig::default());
        assert_eq!(config.source.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_from_toml_and_json() {
        let dir = TempDir::new().unwrap();

        let toml_path = dir.path().join("config.toml");
        fs::write(&toml_path, "[logging]\nlevel = \"debug\"\nformat = \"json\"\n").unwrap();
        let config = Config::from_file(&toml_path).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");

        let json_path = dir.path().join("config.json");
        fs::write(&json_path, r#"{"output": {"color": false}}"#).unwrap();
        let config = Config::from_file(&json_path).unwrap();
        assert!(!config.output.color);
        assert_eq!(config.output.format, "human");
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ini");
        fs::write(&path, "x=1").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat { .. }));
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = Config::from_file(Path::new("/nonexistent/railkit.yaml")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_search_path_starts_in_working_directory() {
        let paths = Config::default_config_paths();
        assert_eq!(paths[0], PathBuf::from(".railkit.yaml"));
        assert_eq!(paths[3], PathBuf::from(".railkit.toml"));
    }
}
