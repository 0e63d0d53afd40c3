//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the recap
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{RecapConfig, RecapDefaults, TeamLabels};

/// Loads and provides access to the recap configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// ├── labels.yaml    # Crew and project display labels
/// └── defaults.yaml  # Request defaults (row limit)
/// ```
///
/// # Example
///
/// ```no_run
/// use recap_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Regular crew label: {}", loader.config().labels().regular_labor);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RecapConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let labels = Self::load_yaml::<TeamLabels>(&path.join("labels.yaml"))?;
        let defaults = Self::load_yaml::<RecapDefaults>(&path.join("defaults.yaml"))?;

        Ok(Self {
            config: RecapConfig::new(labels, defaults),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &RecapConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> RecapConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config"
    }

    fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("recap-config-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        let labels = loader.config().labels();
        assert_eq!(labels.regular_labor, "Regular Labor");
        assert_eq!(labels.helper_labor, "Helper Labor");
        assert_eq!(labels.specialist_prefix, "Specialist");
        assert_eq!(loader.config().defaults().row_limit, Some(500));
    }

    #[test]
    fn test_shipped_labels_match_builtin_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.config().labels(), &TeamLabels::default());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("labels.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = scratch_dir();
        fs::write(dir.join("labels.yaml"), "regular_labor: [unterminated").unwrap();
        fs::write(dir.join("defaults.yaml"), "row_limit: 10\n").unwrap();

        let result = ConfigLoader::load(&dir);
        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("labels.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_missing_defaults_file_returns_error() {
        let dir = scratch_dir();
        fs::copy(
            Path::new(config_path()).join("labels.yaml"),
            dir.join("labels.yaml"),
        )
        .unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("defaults.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }

        fs::remove_dir_all(dir).ok();
    }
}
