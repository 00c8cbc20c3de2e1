use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::ChaseCamera;
use crate::resources::errors::{ensure_positive, ensure_unit_interval, ConfigError, Result};

/// Free-mode orbit controller tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    /// Fraction of the pending motion applied per frame.
    pub damping: f64,
    /// Radians per pixel of drag.
    pub rotate_speed: f64,
    /// Fraction of the orbit radius per pixel of drag.
    pub pan_speed: f64,
    /// Radius shrink per scroll line.
    pub zoom_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            damping: 0.05,
            rotate_speed: 0.005,
            pan_speed: 0.002,
            zoom_speed: 0.1,
            min_radius: 5.0,
            max_radius: 500.0,
        }
    }
}

impl OrbitConfig {
    pub fn validate(&self) -> Result<()> {
        ensure_unit_interval("orbit.damping", self.damping)?;
        if self.damping == 0.0 {
            return Err(ConfigError::ValidationError(
                "orbit.damping must be above zero".to_string(),
            ));
        }
        ensure_positive("orbit.rotate_speed", self.rotate_speed)?;
        ensure_positive("orbit.pan_speed", self.pan_speed)?;
        ensure_unit_interval("orbit.zoom_speed", self.zoom_speed)?;
        ensure_positive("orbit.min_radius", self.min_radius)?;
        ensure_positive("orbit.max_radius", self.max_radius)?;
        if self.min_radius > self.max_radius {
            return Err(ConfigError::ValidationError(format!(
                "orbit.min_radius ({}) exceeds orbit.max_radius ({})",
                self.min_radius, self.max_radius
            )));
        }
        Ok(())
    }
}

/// Chase rig geometry plus the free-mode orbit tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub distance: f64,
    pub height: f64,
    pub look_offset: Vector3<f64>,
    /// Where the camera sits before the first tick.
    pub initial_eye: Vector3<f64>,
    /// Vertical field of view [deg].
    pub fov: f64,
    pub orbit: OrbitConfig,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 25.0,
            height: 8.0,
            look_offset: Vector3::new(0.0, 0.0, -10.0),
            initial_eye: Vector3::new(0.0, 10.0, 20.0),
            fov: 75.0,
            orbit: OrbitConfig::default(),
        }
    }
}

impl CameraConfig {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("camera.distance", self.distance)?;
        if !self.height.is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "camera.height must be finite, got {}",
                self.height
            )));
        }
        for (name, v) in [
            ("camera.look_offset", &self.look_offset),
            ("camera.initial_eye", &self.initial_eye),
        ] {
            if !v.iter().all(|c| c.is_finite()) {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be finite, got {v:?}"
                )));
            }
        }
        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(ConfigError::ValidationError(format!(
                "camera.fov must lie in (0, 180), got {}",
                self.fov
            )));
        }
        self.orbit.validate()
    }

    pub fn chase_camera(&self) -> ChaseCamera {
        ChaseCamera::new(self.distance, self.height, self.look_offset)
    }
}
