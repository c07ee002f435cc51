//! Application configuration structures

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::model::Platform;

/// Errors from loading or saving the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize configuration")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to write config file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Main configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub candidates: CandidatesConfig,
    /// Extra environment variables applied by `run`, values expanded
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

/// UI configuration options
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UiConfig {
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            language: default_language(),
        }
    }
}

/// Candidate directories keyed by platform.
///
/// Entries may use `~`, `$VAR`, `${VAR}` or `%VAR%` references; they are
/// expanded at assemble time, not when the config is loaded.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CandidatesConfig {
    #[serde(default)]
    pub unix: Vec<String>,
    #[serde(default)]
    pub windows: Vec<String>,
}

impl CandidatesConfig {
    pub fn for_platform(&self, platform: Platform) -> &Vec<String> {
        match platform {
            Platform::Unix => &self.unix,
            Platform::Windows => &self.windows,
        }
    }

    pub fn for_platform_mut(&mut self, platform: Platform) -> &mut Vec<String> {
        match platform {
            Platform::Unix => &mut self.unix,
            Platform::Windows => &mut self.windows,
        }
    }
}

impl Config {
    /// Get the wpath configuration directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("~"))
                    .join(".config")
            })
            .join("wpath")
    }

    /// Get the default configuration file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from a file, or return default if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save configuration to a file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.ui.language, "en");
        assert!(config.candidates.unix.is_empty());
        assert!(config.candidates.windows.is_empty());
        assert!(config.env.is_empty());
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.candidates.unix.push("~/.cargo/bin".to_string());
        config.env.insert("EDITOR".to_string(), "nvim".to_string());

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.candidates.unix, config.candidates.unix);
        assert_eq!(parsed.env.get("EDITOR").map(String::as_str), Some("nvim"));
    }

    #[test]
    fn test_candidates_for_platform() {
        let mut config = Config::default();
        config.candidates.unix.push("/opt/bin".to_string());
        config.candidates.windows.push(r"C:\Tools".to_string());

        assert_eq!(
            config.candidates.for_platform(Platform::Unix),
            &vec!["/opt/bin".to_string()]
        );
        assert_eq!(
            config.candidates.for_platform(Platform::Windows),
            &vec![r"C:\Tools".to_string()]
        );
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.ui.language, "en");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.candidates.unix.push("~/bin".to_string());
        config.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.candidates.unix, vec!["~/bin".to_string()]);
    }

    #[test]
    fn test_parse_error_is_typed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not [valid toml").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
