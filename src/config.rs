//! # Configuration Module
//!
//! Settings shared by the helper, the resolver and the CLI.
//!
//! ## Sources, in order:
//! 1. `Config::default()` (fixtures in `<crate>/tests/fixtures`)
//! 2. `<config_dir>/media-toolcheck/config.json`, if present
//! 3. Environment overrides: `MEDIA_TOOLCHECK_FIXTURES_DIR`, `TOOLS_DIR`
//!
//! ## Example config file:
//! ```json
//! {
//!   "fixtures_dir": "/srv/fixtures",
//!   "temp_prefix": "imgtest",
//!   "tools_dir": "/opt/imagemagick/bin"
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::ToolError;

pub const FIXTURES_DIR_ENV: &str = "MEDIA_TOOLCHECK_FIXTURES_DIR";
pub const TOOLS_DIR_ENV: &str = "TOOLS_DIR";

/// Runtime configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Directory holding `red.png` and `blue.png`
    pub fixtures_dir: PathBuf,
    /// Prefix for directories made by `create_default_temp_dir`
    pub temp_prefix: String,
    /// Extra directory searched for executables before `PATH`
    pub tools_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fixtures_dir: Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures"),
            temp_prefix: "media-toolcheck".to_string(),
            tools_dir: None,
        }
    }
}

impl Config {
    /// Validate configuration parameters
    pub fn validate(&self) -> std::result::Result<(), ToolError> {
        if self.temp_prefix.is_empty() {
            return Err(ToolError::Validation("temp_prefix must not be empty".to_string()));
        }

        if self.temp_prefix.contains(std::path::is_separator) {
            return Err(ToolError::Validation(format!(
                "temp_prefix must not contain path separators: {}",
                self.temp_prefix
            )));
        }

        if let Some(ref tools_dir) = self.tools_dir {
            if tools_dir.exists() && !tools_dir.is_dir() {
                return Err(ToolError::Validation(format!(
                    "tools_dir is not a directory: {}",
                    tools_dir.display()
                )));
            }
        }

        Ok(())
    }

    /// Default location of the user config file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("media-toolcheck").join("config.json"))
    }

    /// Load configuration from file, falling back to defaults when missing
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Default file (if any) plus environment overrides
    pub fn load() -> Result<Self> {
        let config = match Self::default_path() {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        Ok(config.with_env_overrides())
    }

    /// Apply `MEDIA_TOOLCHECK_FIXTURES_DIR` and `TOOLS_DIR`
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(dir) = std::env::var_os(FIXTURES_DIR_ENV) {
            debug!("Fixtures dir overridden by {}", FIXTURES_DIR_ENV);
            self.fixtures_dir = PathBuf::from(dir);
        }
        if let Some(dir) = std::env::var_os(TOOLS_DIR_ENV) {
            debug!("Tools dir overridden by {}", TOOLS_DIR_ENV);
            self.tools_dir = Some(PathBuf::from(dir));
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.temp_prefix = String::new();
        assert!(config.validate().is_err());

        config.temp_prefix = "a/b".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_tools_dir_must_be_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("not-a-dir");
        std::fs::write(&file, b"x").unwrap();

        let config = Config {
            tools_dir: Some(file),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ToolError::Validation(_))));
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.fixtures_dir.ends_with("tests/fixtures"));
        assert_eq!(config.temp_prefix, "media-toolcheck");
        assert!(config.tools_dir.is_none());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::from_file(&temp_dir.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_save_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.json");

        let original_config = Config {
            fixtures_dir: PathBuf::from("/srv/fixtures"),
            temp_prefix: "imgtest".to_string(),
            tools_dir: Some(temp_dir.path().to_path_buf()),
        };

        original_config.save_to_file(&config_path).unwrap();
        let loaded_config = Config::from_file(&config_path).unwrap();

        assert_eq!(loaded_config, original_config);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        std::fs::write(&config_path, r#"{ "temp_prefix": "partial" }"#).unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.temp_prefix, "partial");
        assert_eq!(config.fixtures_dir, Config::default().fixtures_dir);
    }
}
