//! Tunable constants with RON persistence. Defaults are the shipped game feel.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::drone::{DEFAULT_SPAWN, MAX_HEIGHT, WORLD_SIZE};

pub const CONFIG_FILE_NAME: &str = "cityflight.ron";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    ReadError(#[source] std::io::Error),

    #[error("failed to write config: {0}")]
    WriteError(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FlightConfig {
    pub physics: PhysicsConfig,
    pub input: InputConfig,
    pub debug: DebugConfig,
}

/// Per-tick integration constants. Speeds are in world units (or degrees) per tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub tick_interval_ms: u32,
    pub speed: f32,
    pub rotation_speed: f32,
    pub lift_speed: f32,
    pub dead_zone: f32,
    pub world_size: f32,
    pub max_height: f32,
    pub spawn: [f32; 2],
    /// Upper bound on ticks released in a single frame; extra debt is dropped.
    pub max_catch_up_ticks: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 16,
            speed: 2.0,
            rotation_speed: 2.0,
            lift_speed: 1.0,
            dead_zone: 0.1,
            world_size: WORLD_SIZE,
            max_height: MAX_HEIGHT,
            spawn: DEFAULT_SPAWN,
            max_catch_up_ticks: 8,
        }
    }
}

impl PhysicsConfig {
    pub fn tick_seconds(&self) -> f32 {
        self.tick_interval_ms as f32 / 1000.0
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Knob travel in pixels; a drag this far (or further) is full deflection.
    pub stick_radius: f32,
    pub browser_hit_radius: f32,
    pub mini_hit_radius: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            stick_radius: 50.0,
            browser_hit_radius: 64.0,
            mini_hit_radius: 48.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Filter directive, e.g. "info" or "debug,cityflight_core=trace".
    pub log_level: String,
    pub show_fps: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            show_fps: false,
        }
    }
}

impl FlightConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: FlightConfig = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
        config.validate()?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Missing file means defaults; a present but broken file is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(ConfigError::WriteError)?;
            }
        }

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;
        std::fs::write(path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let physics = &self.physics;
        if physics.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid("tick_interval_ms must be positive".into()));
        }
        let speeds = [
            ("speed", physics.speed),
            ("rotation_speed", physics.rotation_speed),
            ("lift_speed", physics.lift_speed),
        ];
        for (name, value) in speeds {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be finite and not negative"
                )));
            }
        }
        if !(physics.world_size > 0.0 && physics.world_size.is_finite()) {
            return Err(ConfigError::Invalid("world_size must be positive".into()));
        }
        if !(physics.max_height >= 0.0) {
            return Err(ConfigError::Invalid("max_height must not be negative".into()));
        }
        if !(physics.dead_zone >= 0.0 && physics.dead_zone < 1.0) {
            return Err(ConfigError::Invalid("dead_zone must be in [0, 1)".into()));
        }
        let spawn_inside = physics
            .spawn
            .iter()
            .all(|&axis| (0.0..=physics.world_size).contains(&axis));
        if !spawn_inside {
            return Err(ConfigError::Invalid("spawn must lie inside the world".into()));
        }
        if !(self.input.stick_radius > 0.0) {
            return Err(ConfigError::Invalid("stick_radius must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_design_constants() {
        let config = FlightConfig::default();
        assert_eq!(config.physics.tick_interval_ms, 16);
        assert_eq!(config.physics.speed, 2.0);
        assert_eq!(config.physics.rotation_speed, 2.0);
        assert_eq!(config.physics.lift_speed, 1.0);
        assert_eq!(config.physics.dead_zone, 0.1);
        assert_eq!(config.input.stick_radius, 50.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let mut config = FlightConfig::default();
        config.physics.speed = 3.5;
        config.debug.show_fps = true;

        config.save(&path).unwrap();
        let loaded = FlightConfig::load(&path).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = FlightConfig::load_or_default(&dir.path().join("absent.ron")).unwrap();
        assert_eq!(loaded, FlightConfig::default());
    }

    #[test]
    fn missing_section_uses_default() {
        let config: FlightConfig = ron::from_str("(physics: (speed: 4.0))").unwrap();
        assert_eq!(config.physics.speed, 4.0);
        assert_eq!(config.physics.lift_speed, 1.0);
        assert_eq!(config.input, InputConfig::default());
    }

    #[test]
    fn broken_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "{{not ron").unwrap();
        assert!(matches!(
            FlightConfig::load_or_default(&path),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn rejects_zero_stick_radius() {
        let mut config = FlightConfig::default();
        config.input.stick_radius = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_non_finite_speed() {
        let config: FlightConfig = ron::from_str("(physics: (rotation_speed: inf))").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = FlightConfig::default();
        config.physics.speed = f32::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = FlightConfig::default();
        config.physics.lift_speed = -1.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn loading_non_finite_speed_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "(physics: (speed: NaN))").unwrap();
        assert!(matches!(
            FlightConfig::load(&path),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_spawn_outside_world() {
        let mut config = FlightConfig::default();
        config.physics.spawn = [2500.0, 10.0];
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
