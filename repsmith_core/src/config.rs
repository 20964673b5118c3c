//! Configuration file support for repsmith.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/repsmith/config.toml`.

use crate::{CatalogEntry, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Default generation parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_wod_exercises")]
    pub wod_exercises: usize,

    #[serde(default = "default_accessory_exercises")]
    pub accessory_exercises: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            wod_exercises: default_wod_exercises(),
            accessory_exercises: default_accessory_exercises(),
        }
    }
}

/// Custom catalog entries, merged after the built-in ones
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub custom: Vec<CatalogEntry>,
}

// Default value functions
fn default_wod_exercises() -> usize {
    2
}

fn default_accessory_exercises() -> usize {
    2
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME")
                .expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("repsmith").join("config.toml")
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.generator.wod_exercises, 2);
        assert_eq!(config.generator.accessory_exercises, 2);
        assert!(config.catalog.custom.is_empty());
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.generator.wod_exercises = 4;
        config.catalog.custom.push(CatalogEntry {
            muscle_group: "Shoulders".into(),
            movement_pattern: "Push – Vertical".into(),
            exercises: vec!["Overhead Press".into()],
        });

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.generator.wod_exercises, 4);
        assert_eq!(parsed.catalog.custom.len(), 1);
        assert_eq!(parsed.catalog.custom[0].exercises, vec!["Overhead Press"]);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[generator]
wod_exercises = 3
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.generator.wod_exercises, 3);
        assert_eq!(config.generator.accessory_exercises, 2); // default
    }

    #[test]
    fn test_custom_catalog_entries_parse() {
        let toml_str = r#"
[[catalog.custom]]
muscle_group = "Arms"
movement_pattern = "Pull – Vertical"
exercises = ["Chin-Up", "Bicep Curl"]
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.catalog.custom.len(), 1);
        assert_eq!(config.catalog.custom[0].muscle_group, "Arms");
        assert_eq!(config.catalog.custom[0].exercises.len(), 2);
    }

    #[test]
    fn test_save_and_load_from_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.generator.accessory_exercises = 5;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.generator.accessory_exercises, 5);
    }
}
