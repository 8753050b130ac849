use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};
use tracing::debug;

use crate::model::GeoCoordinate;
use crate::placeholder::{PlaceholderSource, placeholder_source};

/// Station position used when the caller does not pass coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlaceholderConfig {
    /// Seed for wind direction, air quality and the pressure/visibility
    /// fallbacks. Unset means a fresh random draw on every run.
    pub seed: Option<u64>,
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// default_device = "station-001"
///
/// [location]
/// latitude = 19.9
/// longitude = 75.5
///
/// [placeholders]
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    pub default_device: Option<String>,
    pub location: Option<LocationConfig>,
    #[serde(default)]
    pub placeholders: PlaceholderConfig,
}

impl Config {
    /// The configured location, checked against the valid coordinate ranges.
    pub fn default_location(&self) -> Result<Option<GeoCoordinate>> {
        let Some(loc) = self.location else {
            return Ok(None);
        };

        let coordinate = GeoCoordinate::new(loc.latitude, loc.longitude)
            .context("Invalid [location] in config file")?;

        Ok(Some(coordinate))
    }

    pub fn set_location(&mut self, coordinate: GeoCoordinate) {
        self.location = Some(LocationConfig {
            latitude: coordinate.latitude(),
            longitude: coordinate.longitude(),
        });
    }

    /// Empty ids clear the default.
    pub fn set_default_device(&mut self, device_id: &str) {
        let device_id = device_id.trim();
        self.default_device = (!device_id.is_empty()).then(|| device_id.to_string());
    }

    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.placeholders.seed = seed;
    }

    /// Placeholder source honouring the configured seed.
    pub fn placeholder_source(&self) -> Box<dyn PlaceholderSource> {
        placeholder_source(self.placeholders.seed)
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-dashboard", "dashboard")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
