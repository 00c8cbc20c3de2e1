use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::camera::CameraConfig;
use crate::components::{AirplaneVariant, FlightConfig};
use crate::resources::errors::{ConfigError, Result};
use crate::resources::KeyBindings;

/// Everything needed to start a flight session.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub variant: AirplaneVariant,
    /// Fixed simulation ticks per second. All flight constants are per tick.
    pub tick_hz: f64,
    pub flight: FlightConfig,
    pub camera: CameraConfig,
    pub bindings: KeyBindings,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            variant: AirplaneVariant::default(),
            tick_hz: 60.0,
            flight: FlightConfig::default(),
            camera: CameraConfig::default(),
            bindings: KeyBindings::default(),
        }
    }
}

impl SessionConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: SessionConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// `<config dir>/townflyer/session.yaml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("townflyer").join("session.yaml"))
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.tick_hz.is_finite() && self.tick_hz > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "tick_hz must be positive, got {}",
                self.tick_hz
            )));
        }
        self.flight.validate()?;
        self.camera.validate()?;

        let conflicts = self.bindings.conflicts();
        if let Some((a, b)) = conflicts.first() {
            return Err(ConfigError::ValidationError(format!(
                "{a:?} and {b:?} are bound to the same key"
            )));
        }
        Ok(())
    }
}
