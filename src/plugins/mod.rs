mod camera;
mod flight;
mod scene;
mod staging;

pub use camera::CameraPlugin;
pub use flight::{FlightPlugin, FlightSet};
pub use scene::ScenePlugin;
pub use staging::{StartupSequencePlugin, StartupStage};

use bevy::prelude::*;

use crate::resources::SessionConfig;

/// Everything a flight needs except rendering: staging, flight model and camera control.
pub fn add_flight_plugins(app: &mut App, config: SessionConfig) {
    app.add_plugins((
        StartupSequencePlugin,
        FlightPlugin::new(config),
        CameraPlugin,
    ));
}
