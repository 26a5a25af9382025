//! Game Config
//!
//! Central configuration loaded from JSON. Every section defaults, so a
//! file only needs the values it overrides:
//!
//! ```json
//! { "movement": { "run_speed": 8.0 }, "clock": { "fixed_hz": 60 } }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::camera::CameraConfig;
use crate::error::ConfigError;
use crate::player::MovementConfig;
use crate::timing::ClockConfig;

use crate::game::level::LevelConfig;

/// Tuning for a full session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub movement: MovementConfig,
    pub camera: CameraConfig,
    pub level: LevelConfig,
    pub clock: ClockConfig,
    /// Trigger a camera shake when the character lands
    pub shake_on_land: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            movement: MovementConfig::default(),
            camera: CameraConfig::default(),
            level: LevelConfig::default(),
            clock: ClockConfig::default(),
            shake_on_land: true,
        }
    }
}

static_assertions::assert_impl_all!(GameConfig: Send, Sync, Clone);

impl GameConfig {
    /// Read and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        tracing::info!(path = %path.display(), "loaded game config");
        Ok(config)
    }

    /// Parse and validate config JSON.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the config as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.movement.validate()?;
        self.camera.validate()?;
        self.level.validate()?;
        if self.clock.fixed_hz == 0 {
            return Err(ConfigError::invalid("clock.fixed_hz", "must be at least 1"));
        }
        if self.clock.max_steps == 0 {
            return Err(ConfigError::invalid("clock.max_steps", "must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validates() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "movement": { "run_speed": 8.0 }, "clock": { "fixed_hz": 60 } }"#;
        let config = GameConfig::from_json(json).unwrap();
        assert_eq!(config.movement.run_speed, 8.0);
        assert_eq!(config.movement.number_of_jumps, MovementConfig::default().number_of_jumps);
        assert_eq!(config.clock.fixed_hz, 60);
        assert_eq!(config.camera, CameraConfig::default());
    }

    #[test]
    fn test_json_roundtrip_preserves_config() {
        let mut config = GameConfig::default();
        config.movement.air_control = true;
        config.camera.smoothing = 0.5;
        let back = GameConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = GameConfig::from_json(r#"{ "camera": { "smoothing": 2.0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "camera.smoothing", .. }));

        let err = GameConfig::from_json(r#"{ "clock": { "fixed_hz": 0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "clock.fixed_hz", .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_save_and_load() {
        let path =
            std::env::temp_dir().join(format!("ledgekit-config-{}.json", std::process::id()));
        let mut config = GameConfig::default();
        config.movement.number_of_jumps = 2;
        config.save(&path).unwrap();

        let loaded = GameConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let err = GameConfig::load("/nonexistent/ledgekit/config.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
