//! Configuration management module
//!
//! Handles loading, saving, and validation of the quiz configuration.
//! The only tunable is the per-question time limit.

use crate::{QuizError, Result, APP_NAME, CONFIG_FILE, DEFAULT_TIME_LIMIT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Longest accepted countdown, in seconds
pub const MAX_TIME_LIMIT: u32 = 300;

/// Quiz configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Seconds allowed per question
    pub time_limit_secs: u32,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: DEFAULT_TIME_LIMIT,
        }
    }
}

impl QuizConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-question time limit
    pub fn with_time_limit(mut self, secs: u32) -> Self {
        self.time_limit_secs = secs;
        self
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.time_limit_secs == 0 {
            return Err(QuizError::ConfigError(
                "Time limit must be greater than 0".to_string(),
            ));
        }

        if self.time_limit_secs > MAX_TIME_LIMIT {
            return Err(QuizError::ConfigError(format!(
                "Time limit too long: {}s (max: {}s)",
                self.time_limit_secs, MAX_TIME_LIMIT
            )));
        }

        Ok(())
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from `path`, falling back to defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            QuizError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            QuizError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                QuizError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(path, content).map_err(|e| {
            QuizError::ConfigError(format!(
                "Failed to write config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/tickquiz/tickquiz.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            QuizError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = QuizConfig::default();
        assert_eq!(config.time_limit_secs, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bounds() {
        assert!(QuizConfig::new().with_time_limit(0).validate().is_err());
        assert!(QuizConfig::new().with_time_limit(1).validate().is_ok());
        assert!(QuizConfig::new().with_time_limit(MAX_TIME_LIMIT).validate().is_ok());
        assert!(QuizConfig::new()
            .with_time_limit(MAX_TIME_LIMIT + 1)
            .validate()
            .is_err());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = QuizConfig::load_from(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, QuizConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("tickquiz.toml");

        QuizConfig::new().with_time_limit(25).save_to(&path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("time_limit_secs = 25"));

        let loaded = QuizConfig::load_from(&path).unwrap();
        assert_eq!(loaded.time_limit_secs, 25);
    }

    #[test]
    fn test_missing_key_uses_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tickquiz.toml");
        fs::write(&path, "").unwrap();
        assert_eq!(QuizConfig::load_from(&path).unwrap().time_limit_secs, 10);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tickquiz.toml");

        fs::write(&path, "time_limit_secs = \"soon\"").unwrap();
        assert!(matches!(QuizConfig::load_from(&path), Err(QuizError::ConfigError(_))));

        fs::write(&path, "time_limit_secs = 0").unwrap();
        assert!(matches!(QuizConfig::load_from(&path), Err(QuizError::ConfigError(_))));
    }

    #[test]
    fn test_save_rejects_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tickquiz.toml");
        assert!(QuizConfig::new().with_time_limit(0).save_to(&path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_config_file_path() {
        let path = QuizConfig::config_file_path();
        assert!(path.is_ok());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("tickquiz"));
        assert!(path.to_string_lossy().ends_with("tickquiz.toml"));
    }
}
