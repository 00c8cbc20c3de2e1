use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Continuous flight state of the player airplane.
///
/// Advanced exactly once per fixed tick by [`crate::systems::update_flight`].
/// The airplane's visual transform is a projection of this state and is never
/// stored anywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightState {
    /// Signed forward speed along the heading [units/tick].
    pub speed: f64,
    /// Yaw about the vertical axis [rad], unbounded.
    pub heading: f64,
    /// Signed yaw rate [rad/tick].
    pub heading_rate: f64,
    /// Height above the ground plane [units].
    pub altitude: f64,
    /// Smoothing target for `altitude`.
    pub target_altitude: f64,
    /// Signed climb rate [units/tick].
    pub vertical_speed: f64,
    /// Nose up/down angle [rad].
    pub pitch: f64,
    pub target_pitch: f64,
    /// Bank angle [rad].
    pub roll: f64,
    pub target_roll: f64,
    /// World-space position. `position.y` mirrors `altitude`.
    pub position: Vector3<f64>,
}

impl Default for FlightState {
    fn default() -> Self {
        Self::at_spawn(Vector3::zeros())
    }
}

impl FlightState {
    /// A state at rest on the ground at `spawn`.
    pub fn at_spawn(spawn: Vector3<f64>) -> Self {
        Self {
            speed: 0.0,
            heading: 0.0,
            heading_rate: 0.0,
            altitude: 0.0,
            target_altitude: 0.0,
            vertical_speed: 0.0,
            pitch: 0.0,
            target_pitch: 0.0,
            roll: 0.0,
            target_roll: 0.0,
            position: Vector3::new(spawn.x, 0.0, spawn.z),
        }
    }

    /// Zero every field and snap back to `spawn`.
    pub fn reset(&mut self, spawn: Vector3<f64>) {
        *self = Self::at_spawn(spawn);
    }

    pub fn is_near_ground(&self, ground_eps: f64) -> bool {
        self.altitude <= ground_eps
    }

    /// Horizontal unit vector the airplane travels along.
    pub fn forward(&self) -> Vector3<f64> {
        Vector3::new(self.heading.sin(), 0.0, self.heading.cos())
    }

    /// Airplane attitude composed as yaw * pitch * roll.
    ///
    /// Yaw is about +Y, pitch about +X and roll about +Z, applied with yaw
    /// outermost. Changing the order changes how banked turns look.
    pub fn orientation(&self) -> UnitQuaternion<f64> {
        let yaw = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), self.heading);
        let pitch = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), self.pitch);
        let roll = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), self.roll);
        yaw * pitch * roll
    }
}
