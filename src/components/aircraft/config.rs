use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::resources::errors::{
    ensure_finite, ensure_positive, ensure_unit_interval, ConfigError, Result,
};

/// Tuning table for the arcade flight model.
///
/// Every rate is expressed per fixed tick, not per second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// At or below this altitude the airplane counts as on the ground.
    pub ground_eps: f64,
    /// Throttle step per tick.
    pub accel: f64,
    /// Fastest reverse taxi speed (magnitude).
    pub reverse_speed_limit: f64,
    /// Airborne stall floor.
    pub min_air_speed: f64,
    pub max_air_speed: f64,
    /// Yaw-rate step per tick. Also caps the yaw rate.
    pub rot_accel: f64,
    pub heading_decay: f64,
    pub climb_accel: f64,
    pub vertical_decay: f64,
    pub max_vertical_speed: f64,
    /// Floor applied to the altitude target, not to the altitude itself.
    pub min_target_altitude: f64,
    pub altitude_smoothing: f64,
    pub max_pitch: f64,
    pub pitch_smoothing: f64,
    pub max_roll: f64,
    pub roll_smoothing: f64,
    /// Pitch and roll decay while on the ground.
    pub ground_attitude_decay: f64,
    /// Reset position. Only x and z are used, the airplane always resets to
    /// altitude zero.
    pub spawn: Vector3<f64>,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            ground_eps: 2.0,
            accel: 0.01,
            reverse_speed_limit: 0.2,
            min_air_speed: 0.2,
            max_air_speed: 0.5,
            rot_accel: 0.03,
            heading_decay: 0.95,
            climb_accel: 0.03,
            vertical_decay: 0.98,
            max_vertical_speed: 1.0,
            min_target_altitude: 1.0,
            altitude_smoothing: 0.15,
            max_pitch: PI / 6.0,
            pitch_smoothing: 0.1,
            max_roll: PI / 4.0,
            roll_smoothing: 0.15,
            ground_attitude_decay: 0.95,
            spawn: Vector3::new(0.0, 0.0, -40.0),
        }
    }
}

impl FlightConfig {
    pub fn validate(&self) -> Result<()> {
        ensure_finite("ground_eps", self.ground_eps)?;
        ensure_finite("min_target_altitude", self.min_target_altitude)?;
        ensure_positive("accel", self.accel)?;
        ensure_finite("reverse_speed_limit", self.reverse_speed_limit)?;
        if self.reverse_speed_limit < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "reverse_speed_limit must not be negative, got {}",
                self.reverse_speed_limit
            )));
        }
        ensure_positive("min_air_speed", self.min_air_speed)?;
        ensure_positive("max_air_speed", self.max_air_speed)?;
        if self.min_air_speed > self.max_air_speed {
            return Err(ConfigError::ValidationError(format!(
                "min_air_speed ({}) exceeds max_air_speed ({})",
                self.min_air_speed, self.max_air_speed
            )));
        }
        ensure_positive("rot_accel", self.rot_accel)?;
        ensure_positive("climb_accel", self.climb_accel)?;
        ensure_positive("max_vertical_speed", self.max_vertical_speed)?;
        ensure_positive("max_pitch", self.max_pitch)?;
        ensure_positive("max_roll", self.max_roll)?;

        for (name, value) in [
            ("heading_decay", self.heading_decay),
            ("vertical_decay", self.vertical_decay),
            ("ground_attitude_decay", self.ground_attitude_decay),
        ] {
            ensure_unit_interval(name, value)?;
            if value == 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be above zero"
                )));
            }
        }
        for (name, value) in [
            ("altitude_smoothing", self.altitude_smoothing),
            ("pitch_smoothing", self.pitch_smoothing),
            ("roll_smoothing", self.roll_smoothing),
        ] {
            ensure_unit_interval(name, value)?;
        }

        if !self.spawn.iter().all(|v| v.is_finite()) {
            return Err(ConfigError::ValidationError(format!(
                "spawn must be finite, got {:?}",
                self.spawn
            )));
        }
        Ok(())
    }

    /// Pitch produced per unit of vertical speed.
    pub fn pitch_per_vertical_speed(&self) -> f64 {
        self.max_pitch / self.max_vertical_speed
    }

    /// Roll produced per unit of yaw rate.
    pub fn roll_per_heading_rate(&self) -> f64 {
        self.max_roll / self.rot_accel
    }
}
