//! Configuration management for the application.
//!
//! Machine defaults live in a TOML file in the platform config directory,
//! so `knitout header` and `knitout swatch` can be run without repeating
//! `--machine` and `--gauge` each time.

use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME, DEFAULT_KNITOUT_VERSION};
use crate::models::{Header, StartPosition};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Target machine settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MachineConfig {
    /// Model name written as `;;Machine`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Needles per inch written as `;;Gauge`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gauge: Option<String>,
}

/// Defaults for the generated header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Knitout version for the magic line
    #[serde(default = "default_version")]
    pub version: String,
    /// Start position (right, left, center or keep)
    #[serde(default = "default_position")]
    pub position: String,
    /// Carriers in front-to-back order
    #[serde(default)]
    pub carriers: Vec<String>,
}

fn default_version() -> String {
    DEFAULT_KNITOUT_VERSION.to_string()
}

fn default_position() -> String {
    StartPosition::default().to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            position: default_position(),
            carriers: Vec::new(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - `$KNITOUT_CONFIG_DIR/config.toml` when the variable is set
/// - Linux: `~/.config/knitout/config.toml`
/// - macOS: `~/Library/Application Support/knitout/config.toml`
/// - Windows: `%APPDATA%\knitout\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Target machine
    #[serde(default)]
    pub machine: MachineConfig,
    /// Header defaults
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file, or defaults if there is none.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file, or defaults if it is missing.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        debug!(path = %config_path.display(), "loaded config");

        Ok(config)
    }

    /// Saves configuration to the config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to a specific file using temp file + rename.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        debug!(path = %config_path.display(), "saved config");
        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `version` is not empty
    /// - `position` is one of right, left, center, keep
    pub fn validate(&self) -> Result<()> {
        if self.output.version.trim().is_empty() {
            anyhow::bail!("Knitout version must not be empty");
        }

        self.start_position()?;

        Ok(())
    }

    /// The configured start position.
    pub fn start_position(&self) -> Result<StartPosition> {
        self.output
            .position
            .parse::<StartPosition>()
            .context("Invalid position in configuration")
    }

    /// Builds a header pre-filled with the configured defaults.
    pub fn header(&self) -> Result<Header> {
        let mut header = Header::new();
        header
            .set_version(self.output.version.clone())
            .set_carriers(&self.output.carriers)
            .set_position(self.start_position()?);

        if let Some(name) = &self.machine.name {
            header.set_machine(name.clone());
        }
        if let Some(gauge) = &self.machine.gauge {
            header.set_gauge(gauge);
        }

        Ok(header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.machine.name, None);
        assert_eq!(config.output.version, "2");
        assert_eq!(config.output.position, "right");
        assert!(config.output.carriers.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.machine.name = Some("SWG091N2".to_string());
        config.machine.gauge = Some("15".to_string());
        config.output.carriers = vec!["1".to_string(), "2".to_string()];
        config.output.position = "center".to_string();

        config.save_to(&path).unwrap();
        assert!(!path.with_extension("toml.tmp").exists());

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[machine]\nname = \"DE-FN1922\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.machine.name.as_deref(), Some("DE-FN1922"));
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::new();
        config.output.position = "middle".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.output.version = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_file_is_not_saved() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let mut config = Config::new();
        config.output.position = "middle".to_string();

        assert!(config.save_to(&path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_header_uses_defaults() {
        let mut config = Config::new();
        config.machine.name = Some("SWGXYZ".to_string());
        config.machine.gauge = Some("15".to_string());
        config.output.carriers = vec!["1".to_string(), "2".to_string()];

        let header = config.header().unwrap();
        assert_eq!(
            header.render(),
            ";!knitout-2\n;;Machine: SWGXYZ\n;;Gauge: 15\n;;Carriers: 1 2\n;;Position: right\n\n"
        );
    }
}
