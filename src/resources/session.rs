use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};

use crate::components::{
    AirplaneVariant, CameraMode, CameraPose, ChaseCamera, FlightConfig, FlightState,
};
use crate::resources::{InputSnapshot, SessionConfig};
use crate::systems::update_flight;

/// One running flight: the airplane's state, the chase camera and their tuning.
///
/// This is the only writer of flight and camera state. Systems receive it as a
/// resource instead of reaching for globals.
#[derive(Resource, Debug, Clone)]
pub struct FlightSession {
    pub flight: FlightState,
    pub camera: ChaseCamera,
    pub config: FlightConfig,
    pub variant: AirplaneVariant,
    ticks: u64,
}

impl Default for FlightSession {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}

impl FlightSession {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            flight: FlightState::at_spawn(config.flight.spawn),
            camera: config.camera.chase_camera(),
            config: config.flight.clone(),
            variant: config.variant,
            ticks: 0,
        }
    }

    /// Advance the flight model by one fixed tick.
    pub fn tick(&mut self, input: &InputSnapshot) {
        update_flight(&mut self.flight, &self.config, input);
        self.ticks += 1;
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn position(&self) -> Vector3<f64> {
        self.flight.position
    }

    pub fn orientation(&self) -> UnitQuaternion<f64> {
        self.flight.orientation()
    }

    pub fn camera_mode(&self) -> CameraMode {
        self.camera.mode
    }

    /// Chase pose for the current flight state, `None` in free mode.
    pub fn camera_pose(&self) -> Option<CameraPose> {
        self.camera.update(&self.flight)
    }

    /// Flip the camera mode. Entering free mode returns the airplane position,
    /// which the orbit controller should take as its one-off look target.
    pub fn toggle_camera(&mut self) -> Option<Vector3<f64>> {
        match self.camera.toggle() {
            CameraMode::Free => Some(self.flight.position),
            CameraMode::Follow => None,
        }
    }
}
