use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use serde::Deserialize;

use crate::position::Position;

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingSection,
    #[serde(rename = "static")]
    pub static_files: StaticSection,
    pub guide: GuideSection,
    pub position: PositionSection,
    pub grid: GridSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    pub fn load() -> Result<Self> {
        let config_path =
            env::var("GUIDEPOST_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let mut builder = config::Config::builder();

        if Path::new(&config_path).exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(&config_path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("GUIDEPOST")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        config.validate()?;

        Ok(config)
    }

    /// Reject configurations the handlers cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.guide.min_step_count < 2 {
            bail!("guide.min_step_count must be at least 2");
        }
        if self.guide.max_step_count < self.guide.min_step_count {
            bail!("guide.max_step_count must not be below guide.min_step_count");
        }
        if !(0.0..=1.0).contains(&self.guide.waypoint_probability) {
            bail!("guide.waypoint_probability must be within [0, 1]");
        }
        if self.guide.latency.enabled && self.guide.latency.max_ms < self.guide.latency.min_ms {
            bail!("guide.latency.max_ms must not be below guide.latency.min_ms");
        }
        if self.grid.cell_size == 0 {
            bail!("grid.cell_size must be positive");
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Text,
}

/// Root directory for the static asset mounts (`/maps`, `/waypoints`)
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticSection {
    pub root: String,
}

impl Default for StaticSection {
    fn default() -> Self {
        Self {
            root: "./static".to_string(),
        }
    }
}

/// Tunables for the guide endpoint
///
/// The waypoint attachment probability and the step-count range are inherited
/// demo constants, exposed here rather than hardcoded.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GuideSection {
    pub min_step_count: usize,
    pub max_step_count: usize,
    pub waypoint_probability: f64,
    pub latency: LatencySection,
}

impl Default for GuideSection {
    fn default() -> Self {
        Self {
            min_step_count: 2,
            max_step_count: 10,
            waypoint_probability: 0.5,
            latency: LatencySection::default(),
        }
    }
}

/// Simulated network latency for the guide endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LatencySection {
    pub enabled: bool,
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for LatencySection {
    fn default() -> Self {
        Self {
            enabled: true,
            min_ms: 100,
            max_ms: 2000,
        }
    }
}

/// Seed value for the simulated position
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PositionSection {
    pub x: i32,
    pub y: i32,
    pub floor: i32,
}

impl PositionSection {
    pub fn initial(&self) -> Position {
        Position::new(self.x, self.y, self.floor)
    }
}

impl Default for PositionSection {
    fn default() -> Self {
        Self {
            x: 12,
            y: 24,
            floor: 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GridSection {
    pub cell_size: u32,
}

impl Default for GridSection {
    fn default() -> Self {
        Self { cell_size: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        AppConfig::default().validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_tiny_step_count() {
        let mut config = AppConfig::default();
        config.guide.min_step_count = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_step_range() {
        let mut config = AppConfig::default();
        config.guide.min_step_count = 8;
        config.guide.max_step_count = 4;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_probability_out_of_range() {
        let mut config = AppConfig::default();
        config.guide.waypoint_probability = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_latency_range() {
        let mut config = AppConfig::default();
        config.guide.latency.min_ms = 500;
        config.guide.latency.max_ms = 100;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_disabled_latency_skips_range_check() {
        let mut config = AppConfig::default();
        config.guide.latency.enabled = false;
        config.guide.latency.min_ms = 500;
        config.guide.latency.max_ms = 100;
        config.validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_zero_cell_size() {
        let mut config = AppConfig::default();
        config.grid.cell_size = 0;
        assert!(config.validate().is_err());
    }
}
