//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use civigraph_review::ReviewConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Storage locations
    #[serde(default)]
    pub storage: Storage,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Matching defaults
    #[serde(default)]
    pub matching: Matching,

    /// Review behavior
    #[serde(default)]
    pub review: ReviewConfig,
}

/// Matching defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Matching {
    /// Default acceptance threshold override (0-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u8>,
}

/// Storage locations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Storage {
    /// Relation database path (defaults to ~/.civigraph/civigraph.db)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,

    /// Entity catalog snapshot path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".civigraph").join("config.toml"))
    }

    /// Load configuration from file or create default.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// Resolve the database path, preferring the explicit override.
    pub fn database_path(&self, override_path: Option<&str>) -> Result<PathBuf> {
        if let Some(path) = override_path {
            return Ok(PathBuf::from(path));
        }
        if let Some(path) = &self.storage.database {
            return Ok(PathBuf::from(path));
        }
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".civigraph").join("civigraph.db"))
    }

    /// Resolve the catalog snapshot path, preferring the explicit override.
    pub fn catalog_path(&self, override_path: Option<&str>) -> Result<PathBuf> {
        if let Some(path) = override_path {
            return Ok(PathBuf::from(path));
        }
        if let Some(path) = &self.storage.catalog {
            return Ok(PathBuf::from(path));
        }
        Err(CliError::Config(
            "No entity catalog configured. Pass --catalog or set storage.catalog in config.toml"
                .into(),
        ))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert!(config.storage.database.is_none());
        assert!(matches!(config.settings.format, OutputFormat::Table));
    }

    #[test]
    fn test_override_wins_over_config() {
        let config = Config {
            storage: Storage {
                database: Some("/var/lib/civigraph.db".to_string()),
                catalog: None,
            },
            ..Default::default()
        };

        let resolved = config.database_path(Some("/tmp/other.db")).unwrap();
        assert_eq!(resolved, PathBuf::from("/tmp/other.db"));

        let resolved = config.database_path(None).unwrap();
        assert_eq!(resolved, PathBuf::from("/var/lib/civigraph.db"));
    }

    #[test]
    fn test_missing_catalog_is_an_error() {
        let config = Config::default();
        assert!(config.catalog_path(None).is_err());
        assert!(config.catalog_path(Some("snapshot.json")).is_ok());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config {
            storage: Storage {
                database: Some("graph.db".to_string()),
                catalog: Some("snapshot.json".to_string()),
            },
            ..Default::default()
        };

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.storage.database.as_deref(), Some("graph.db"));
        assert_eq!(parsed.storage.catalog.as_deref(), Some("snapshot.json"));
    }
}
