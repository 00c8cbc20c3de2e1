use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::FlightState;

/// Marker for the camera that renders the flight session.
#[derive(Component, Debug, Default)]
pub struct MainCamera;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CameraMode {
    /// Chase rig attached to the airplane.
    #[default]
    Follow,
    /// The orbit controller owns the camera.
    Free,
}

/// Camera eye and look-at target in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub eye: Vector3<f64>,
    pub look_at: Vector3<f64>,
}

/// Chase-camera rig: a fixed offset carried by the airplane's attitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChaseCamera {
    pub mode: CameraMode,
    /// How far behind the airplane the eye sits.
    pub distance: f64,
    /// How far above the airplane the eye sits.
    pub height: f64,
    /// Look-at point in the airplane's local frame.
    pub look_offset: Vector3<f64>,
}

impl Default for ChaseCamera {
    fn default() -> Self {
        Self {
            mode: CameraMode::Follow,
            distance: 25.0,
            height: 8.0,
            look_offset: Vector3::new(0.0, 0.0, -10.0),
        }
    }
}

impl ChaseCamera {
    pub fn new(distance: f64, height: f64, look_offset: Vector3<f64>) -> Self {
        Self {
            mode: CameraMode::Follow,
            distance,
            height,
            look_offset,
        }
    }

    /// Eye offset in the airplane's local frame.
    pub fn eye_offset(&self) -> Vector3<f64> {
        Vector3::new(0.0, self.height, -self.distance)
    }

    /// Flip between follow and free mode, returning the new mode.
    pub fn toggle(&mut self) -> CameraMode {
        self.mode = match self.mode {
            CameraMode::Follow => CameraMode::Free,
            CameraMode::Free => CameraMode::Follow,
        };
        self.mode
    }

    /// Compute the chase pose for this tick. `None` while in free mode.
    pub fn update(&self, flight: &FlightState) -> Option<CameraPose> {
        if self.mode == CameraMode::Free {
            return None;
        }
        let attitude = flight.orientation();
        Some(CameraPose {
            eye: flight.position + attitude * self.eye_offset(),
            look_at: flight.position + attitude * self.look_offset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_follow_pose_at_zero_heading() {
        let camera = ChaseCamera::default();
        let flight = FlightState::at_spawn(Vector3::new(0.0, 0.0, -40.0));

        let pose = camera.update(&flight).unwrap();
        assert_relative_eq!(pose.eye, Vector3::new(0.0, 8.0, -65.0), epsilon = 1e-9);
        assert_relative_eq!(pose.look_at, Vector3::new(0.0, 0.0, -50.0), epsilon = 1e-9);
    }

    #[test]
    fn test_follow_pose_rotates_with_heading() {
        let camera = ChaseCamera::default();
        let flight = FlightState {
            heading: FRAC_PI_2,
            altitude: 10.0,
            position: Vector3::new(5.0, 10.0, 5.0),
            ..Default::default()
        };

        let pose = camera.update(&flight).unwrap();
        assert_relative_eq!(pose.eye, Vector3::new(-20.0, 18.0, 5.0), epsilon = 1e-9);
        assert_relative_eq!(pose.look_at, Vector3::new(-5.0, 10.0, 5.0), epsilon = 1e-9);
    }

    #[test]
    fn test_free_mode_yields_no_pose() {
        let mut camera = ChaseCamera::default();
        assert_eq!(camera.toggle(), CameraMode::Free);
        assert!(camera.update(&FlightState::default()).is_none());
        assert_eq!(camera.toggle(), CameraMode::Follow);
        assert!(camera.update(&FlightState::default()).is_some());
    }
}
