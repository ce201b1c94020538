//! File-level configuration.
//!
//! A JSON document with optional `simulation`, `spawn`, `viewer` and `runner`
//! sections. Anything left out falls back to its default, so `{}` is a valid
//! config.

use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::params::SimulationParams;
use crate::spawn::SpawnSettings;

/// Environment variable consulted when no config path is given.
pub const CONFIG_ENV: &str = "BOIDS_CONFIG";

/// Settings for the interactive viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    /// Simulation ticks per second.
    pub tick_rate: f32,
    pub boid_size: f32,
    /// Id of the boid whose radii and forces are drawn when decoration is on.
    pub tracked_boid: u32,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            tick_rate: 20.0,
            boid_size: 16.0,
            tracked_boid: 0,
        }
    }
}

/// Settings for the headless runner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerSettings {
    pub ticks: u64,
    /// Log statistics every this many ticks; 0 logs only the final state.
    pub log_interval: u64,
}

impl Default for RunnerSettings {
    fn default() -> Self {
        Self {
            ticks: 200,
            log_interval: 50,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub simulation: SimulationParams,
    pub spawn: SpawnSettings,
    pub viewer: ViewerSettings,
    pub runner: RunnerSettings,
}

impl Config {
    /// Parses and validates a JSON config.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(text)?;
        config.simulation.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads from `path`, else from `$BOIDS_CONFIG`, else uses defaults.
    pub fn resolve(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
        match path {
            Some(path) => Self::load(&path),
            None => {
                info!("no config given, using defaults");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::CohesionMode;
    use crate::spawn::SpawnPattern;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn sections_override_defaults() {
        let config = Config::from_json(
            r#"{
                "simulation": { "width": 800, "cohesion_mode": "damped" },
                "spawn": { "count": 12, "pattern": "scatter", "seed": 9 },
                "viewer": { "tick_rate": 60 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.simulation.width, 800.0);
        assert_eq!(config.simulation.height, 400.0);
        assert_eq!(config.simulation.cohesion_mode, CohesionMode::Damped);
        assert_eq!(config.spawn.pattern, SpawnPattern::Scatter);
        assert_eq!(config.spawn.count, 12);
        assert_eq!(config.viewer.tick_rate, 60.0);
        assert_eq!(config.viewer.boid_size, 16.0);
        assert_eq!(config.runner, RunnerSettings::default());
    }

    #[test]
    fn invalid_values_are_reported() {
        let err = Config::from_json(r#"{ "simulation": { "max_force": -1 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidParams(_)));
        assert!(err.to_string().contains("max_force"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(Config::from_json("{ nope"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Config::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
