//! Configuration management for mdeck.
//!
//! Loads configuration from ${MDECK_HOME}/config.toml with sensible
//! defaults. The dashboard document itself is never persisted; config only
//! covers presentation and diagnostics knobs.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cap on rendered Markdown lines per widget card.
    pub max_widget_height: u16,
    /// Write a debug log file under the mdeck home directory.
    pub log_to_file: bool,
}

impl Config {
    const DEFAULT_MAX_WIDGET_HEIGHT: u16 = 14;

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes a commented default config file, creating parent
    /// directories. Fails if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists: {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_widget_height: Self::DEFAULT_MAX_WIDGET_HEIGHT,
            log_to_file: false,
        }
    }
}

/// The template written by `Config::init`.
fn default_config_template() -> &'static str {
    "\
# mdeck configuration

# Cap on rendered Markdown lines per widget card.
# max_widget_height = 14

# Write a debug log file (mdeck.log) under the mdeck home directory.
# Filter with the MDECK_LOG environment variable (default: info).
# log_to_file = false
"
}

pub mod paths {
    //! Path resolution for mdeck configuration and log directories.
    //!
    //! MDECK_HOME resolution order:
    //! 1. MDECK_HOME environment variable (if set)
    //! 2. ~/.config/mdeck (default)

    use std::path::PathBuf;

    /// Returns the mdeck home directory.
    pub fn mdeck_home() -> PathBuf {
        if let Ok(home) = std::env::var("MDECK_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("mdeck"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        mdeck_home().join("config.toml")
    }

    /// Returns the directory used for log files.
    pub fn log_dir() -> PathBuf {
        mdeck_home().join("logs")
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.max_widget_height, 14);
        assert!(!config.log_to_file);
    }

    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "log_to_file = true\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert!(config.log_to_file);
        assert_eq!(config.max_widget_height, 14);
    }

    #[test]
    fn test_load_invalid_toml_is_an_error() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "max_widget_height = \"tall\"\n").unwrap();

        assert!(Config::load_from(&config_path).is_err());
    }

    #[test]
    fn test_init_creates_config_with_template() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();

        assert!(config_path.exists());
        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("# max_widget_height"));
        assert!(contents.contains("# log_to_file"));
    }

    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "").unwrap();

        assert!(Config::init(&config_path).is_err());
    }
}
