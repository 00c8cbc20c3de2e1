use bevy::prelude::*;
use nalgebra::Vector3;
use std::f64::consts::FRAC_PI_2;

use crate::resources::OrbitConfig;

/// Keeps the orbit camera off the poles so the up vector stays defined.
const POLE_MARGIN: f64 = 0.01;

/// Damped orbit controller that owns the camera in free mode.
///
/// Mouse input adds angular and pan velocity. Each [`OrbitController::step`]
/// applies a `damping` fraction of that velocity and decays the rest, so the
/// view keeps gliding briefly after the mouse stops.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct OrbitController {
    pub enabled: bool,
    pub target: Vector3<f64>,
    /// Azimuth of the eye around the target [rad]. Zero puts the eye on +Z.
    pub yaw: f64,
    /// Elevation of the eye above the target's horizontal plane [rad].
    pub pitch: f64,
    pub radius: f64,
    yaw_velocity: f64,
    pitch_velocity: f64,
    pan_velocity: Vector3<f64>,
    pub damping: f64,
    pub rotate_speed: f64,
    pub pan_speed: f64,
    pub zoom_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::from_config(&OrbitConfig::default())
    }
}

impl OrbitController {
    pub fn from_config(config: &OrbitConfig) -> Self {
        Self {
            enabled: false,
            target: Vector3::zeros(),
            yaw: 0.0,
            pitch: 0.0,
            radius: config.min_radius.max(1.0),
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
            pan_velocity: Vector3::zeros(),
            damping: config.damping,
            rotate_speed: config.rotate_speed,
            pan_speed: config.pan_speed,
            zoom_speed: config.zoom_speed,
            min_radius: config.min_radius,
            max_radius: config.max_radius,
        }
    }

    /// Set the look target once. The controller does not follow it afterwards.
    pub fn anchor(&mut self, target: Vector3<f64>) {
        self.target = target;
        self.yaw_velocity = 0.0;
        self.pitch_velocity = 0.0;
        self.pan_velocity = Vector3::zeros();
    }

    /// Derive yaw, pitch and radius so that [`OrbitController::eye`] lands on `eye`.
    pub fn sync_from_eye(&mut self, eye: Vector3<f64>) {
        let offset = eye - self.target;
        let radius = offset.norm();
        if radius <= f64::EPSILON {
            return;
        }
        self.radius = radius.clamp(self.min_radius, self.max_radius);
        self.yaw = offset.x.atan2(offset.z);
        self.pitch = (offset.y / radius).clamp(-1.0, 1.0).asin();
        self.clamp_pitch();
    }

    /// Unit vector from the target towards the eye.
    pub fn direction(&self) -> Vector3<f64> {
        Vector3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        )
    }

    pub fn eye(&self) -> Vector3<f64> {
        self.target + self.direction() * self.radius
    }

    /// Screen-right and screen-up axes of the current view.
    fn view_axes(&self) -> (Vector3<f64>, Vector3<f64>) {
        let direction = self.direction();
        let right = Vector3::y().cross(&direction).normalize();
        let up = direction.cross(&right);
        (right, up)
    }

    /// Mouse drag in pixels.
    pub fn rotate(&mut self, dx: f64, dy: f64) {
        self.yaw_velocity -= dx * self.rotate_speed;
        self.pitch_velocity += dy * self.rotate_speed;
    }

    /// Mouse drag in pixels; the pan distance scales with the zoom level.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        let (right, up) = self.view_axes();
        let scale = self.radius * self.pan_speed;
        self.pan_velocity += (-right * dx + up * dy) * scale;
    }

    /// Positive `steps` zoom in.
    pub fn zoom(&mut self, steps: f64) {
        let factor = (1.0 - self.zoom_speed).powf(steps);
        self.radius = (self.radius * factor).clamp(self.min_radius, self.max_radius);
    }

    pub fn step(&mut self) {
        self.yaw += self.yaw_velocity * self.damping;
        self.pitch += self.pitch_velocity * self.damping;
        self.target += self.pan_velocity * self.damping;
        self.clamp_pitch();

        let decay = 1.0 - self.damping;
        self.yaw_velocity *= decay;
        self.pitch_velocity *= decay;
        self.pan_velocity *= decay;
    }

    fn clamp_pitch(&mut self) {
        let limit = FRAC_PI_2 - POLE_MARGIN;
        self.pitch = self.pitch.clamp(-limit, limit);
    }
}
