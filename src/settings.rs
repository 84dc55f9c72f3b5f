//! Simulation configuration
//!
//! Loaded from a JSON file. Every field has a default, so a partial file (or
//! `{}`) is valid.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::sim::Bounds;

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Bodies generated on start/reset
    pub particle_count: usize,
    /// World width (same units as positions)
    pub width: f64,
    /// World height
    pub height: f64,
    /// Generated radius range, `[min_radius, max_radius)`
    pub min_radius: f64,
    pub max_radius: f64,
    /// Cap applied to each frame's delta time (seconds)
    pub max_delta_time: f64,
    /// RNG seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            min_radius: DEFAULT_MIN_RADIUS,
            max_radius: DEFAULT_MAX_RADIUS,
            max_delta_time: MAX_DELTA_TIME,
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        log::info!("Config saved to {}", path.display());
        Ok(())
    }

    /// Reject values the generator or the frame clock cannot work with
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(invalid(format!("width must be finite and > 0, got {}", self.width)));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(invalid(format!("height must be finite and > 0, got {}", self.height)));
        }
        if !(self.min_radius > 0.0 && self.min_radius <= self.max_radius) {
            return Err(invalid(format!(
                "radius range must satisfy 0 < min <= max, got [{}, {}]",
                self.min_radius, self.max_radius
            )));
        }
        if !self.max_radius.is_finite() || 2.0 * self.max_radius > self.width.min(self.height) {
            return Err(invalid(format!(
                "max_radius {} does not fit a {}x{} world",
                self.max_radius, self.width, self.height
            )));
        }
        if !(self.max_delta_time.is_finite() && self.max_delta_time > 0.0) {
            return Err(invalid(format!(
                "max_delta_time must be finite and > 0, got {}",
                self.max_delta_time
            )));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> Error {
    Error::InvalidConfig(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.particle_count, 100);
        assert_eq!(config.max_delta_time, 0.1);
        assert_eq!(config.bounds(), Bounds::new(800.0, 600.0));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SimConfig::from_json(r#"{ "particle_count": 12, "seed": 5 }"#).unwrap();
        assert_eq!(config.particle_count, 12);
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.max_radius, DEFAULT_MAX_RADIUS);
    }

    #[test]
    fn test_json_round_trip() {
        let config = SimConfig {
            particle_count: 3,
            seed: Some(77),
            ..Default::default()
        };
        let back = SimConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_rejects_bad_values() {
        let cases = [
            r#"{ "width": 0 }"#,
            r#"{ "height": -10 }"#,
            r#"{ "min_radius": 0 }"#,
            r#"{ "min_radius": 30, "max_radius": 20 }"#,
            r#"{ "width": 30, "max_radius": 20 }"#,
            r#"{ "max_delta_time": 0 }"#,
        ];
        for json in cases {
            let err = SimConfig::from_json(json).unwrap_err();
            assert!(matches!(err, Error::InvalidConfig(_)), "{json}: {err}");
        }
    }

    #[test]
    fn test_malformed_json() {
        let err = SimConfig::from_json("{ particle_count: ").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("particle-sim-{}.json", std::process::id()));
        let config = SimConfig {
            width: 320.0,
            height: 240.0,
            ..Default::default()
        };
        config.save(&path).unwrap();
        let loaded = SimConfig::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SimConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
