//! Application Configuration (evometric.toml)

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::value_objects::Resolution;

pub const CONFIG_FILE_NAME: &str = "evometric.toml";

/// Longest accepted cooldown (one year)
pub const MAX_COOLDOWN_HOURS: f64 = 24.0 * 365.0;

/// Settings that live outside the roadmap document
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// The roadmap JSON
    pub document_path: PathBuf,
    /// Preferred font family for every tier
    pub font_family: String,
    /// Size used for every tier when the preferred family is missing
    pub fallback_font_size: f32,
    /// Minimum wait between two completions
    pub cooldown_hours: f64,
    pub min_background_width: u32,
    pub min_background_height: u32,
    /// Log file; the platform data directory when unset
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            document_path: default_document_path(),
            font_family: "Arial".to_string(),
            fallback_font_size: 18.0,
            cooldown_hours: 4.0,
            min_background_width: 1280,
            min_background_height: 720,
            log_path: None,
        }
    }
}

fn default_document_path() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("evometric"))
        .unwrap_or_else(crate::log::exe_dir)
        .join("progress.json")
}

impl AppConfig {
    /// Find evometric.toml in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        // Check in order: %APPDATA%/evometric, exe dir, cwd
        let candidates = [
            dirs::config_dir().map(|p| p.join("evometric").join(CONFIG_FILE_NAME)),
            Some(crate::log::exe_dir().join(CONFIG_FILE_NAME)),
            Some(PathBuf::from(CONFIG_FILE_NAME)),
        ];

        candidates.into_iter().flatten().find(|c| c.exists())
    }

    /// Load from the first config file found, defaults if there is none
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_path() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=MAX_COOLDOWN_HOURS).contains(&self.cooldown_hours) {
            return Err(ConfigError::Invalid(format!(
                "cooldown_hours must be within 0..={}, got {}",
                MAX_COOLDOWN_HOURS, self.cooldown_hours
            )));
        }
        if !(self.fallback_font_size.is_finite() && self.fallback_font_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "fallback_font_size must be positive, got {}",
                self.fallback_font_size
            )));
        }
        Ok(())
    }

    /// Cooldown clamped to `0..=MAX_COOLDOWN_HOURS`
    pub fn cooldown(&self) -> Duration {
        let hours = if self.cooldown_hours.is_nan() {
            0.0
        } else {
            self.cooldown_hours.clamp(0.0, MAX_COOLDOWN_HOURS)
        };
        Duration::from_secs_f64(hours * 3600.0)
    }

    pub fn min_background(&self) -> Resolution {
        Resolution::new(self.min_background_width, self.min_background_height)
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_path
            .clone()
            .unwrap_or_else(crate::log::default_log_path)
    }
}

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.font_family, "Arial");
        assert_eq!(config.fallback_font_size, 18.0);
        assert_eq!(config.cooldown(), Duration::from_secs(4 * 3600));
        assert_eq!(config.min_background(), Resolution::new(1280, 720));
        assert!(config.document_path.ends_with("progress.json"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            "document_path = \"roadmap/progress.json\"\ncooldown_hours = 0.5\n",
        )
        .unwrap();

        let config = AppConfig::load_from_path(&path).unwrap();
        assert_eq!(config.document_path, PathBuf::from("roadmap/progress.json"));
        assert_eq!(config.cooldown(), Duration::from_secs(1800));
        assert_eq!(config.font_family, "Arial");
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn test_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "font_family = ").unwrap();

        assert!(matches!(
            AppConfig::load_from_path(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_negative_cooldown_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "cooldown_hours = -1.0\n").unwrap();

        assert!(matches!(
            AppConfig::load_from_path(&path),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_huge_cooldown_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "cooldown_hours = 1e300\n").unwrap();

        assert!(matches!(
            AppConfig::load_from_path(&path),
            Err(ConfigError::Invalid(_))
        ));

        let config = AppConfig {
            cooldown_hours: 1e300,
            ..AppConfig::default()
        };
        assert_eq!(
            config.cooldown(),
            Duration::from_secs_f64(MAX_COOLDOWN_HOURS * 3600.0)
        );
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            AppConfig::load_from_path(&dir.path().join("absent.toml")),
            Err(ConfigError::Io { .. })
        ));
    }
}
