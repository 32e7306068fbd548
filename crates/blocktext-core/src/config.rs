//! Configuration file handling for blocktext
//!
//! Config is stored at `~/.config/blocktext/config.yaml` (or the platform
//! equivalent via `dirs::config_dir()`). Every key is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config filename within the blocktext config directory
const FILENAME: &str = "config.yaml";

/// Application directory name
const APP_DIR: &str = "blocktext";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("config not found")]
    NotFound,

    #[error("could not determine config directory")]
    NoConfigDir,
}

/// Top-level blocktext configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Color name used when `--color` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Text rendered when no text is given and stdin is a terminal.
    /// Literal `\n` sequences become line breaks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_text: Option<String>,
}

impl Config {
    /// Return the path to the config file: `<config_dir>/blocktext/config.yaml`.
    pub fn path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load the config from the standard location.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound
            } else {
                ConfigError::Read(e)
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config from `path`, treating a missing file (or a platform without
    /// a config directory) as an empty config.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let result = match path {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        };
        match result {
            Err(ConfigError::NotFound | ConfigError::NoConfigDir) => Ok(Self::default()),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(path: &Path, config: &Config) {
        std::fs::write(path, serde_yaml::to_string(config).unwrap()).unwrap();
    }

    #[test]
    fn test_config_path_is_under_config_dir() {
        let path = Config::path().unwrap();
        assert!(path.ends_with("blocktext/config.yaml"));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config {
            color: Some("cyan".into()),
            default_text: Some("HI\\nTHERE".into()),
        };

        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_config_empty_document() {
        let parsed: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_config_partial() {
        let parsed: Config = serde_yaml::from_str("color: Red\n").unwrap();
        assert_eq!(parsed.color.as_deref(), Some("Red"));
        assert!(parsed.default_text.is_none());
    }

    #[test]
    fn test_config_skip_serializing_none() {
        let yaml = serde_yaml::to_string(&Config::default()).unwrap();
        assert!(!yaml.contains("color"));
        assert!(!yaml.contains("default_text"));
    }

    #[test]
    fn test_config_load_from() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let config = Config {
            color: Some("purple".into()),
            default_text: None,
        };

        write_config(&path, &config);

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.color.as_deref(), Some("purple"));
        assert!(loaded.default_text.is_none());
    }

    #[test]
    fn test_config_load_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nonexistent.yaml");
        let result = Config::load_from(&path);
        assert!(matches!(result, Err(ConfigError::NotFound)));
    }

    #[test]
    fn test_config_load_or_default_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nonexistent.yaml");
        let config = Config::load_or_default(Some(&path)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_load_or_default_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "color: [unterminated\n").unwrap();
        let result = Config::load_or_default(Some(&path));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
