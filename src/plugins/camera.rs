use bevy::prelude::*;
use bevy::transform::TransformSystem;

use crate::components::{MainCamera, OrbitController};
use crate::plugins::StartupStage;
use crate::resources::{FlightSession, SessionConfig};
use crate::systems::{
    camera_toggle_system, chase_camera_system, orbit_camera_system, orbit_input_system,
};
use crate::utils::to_render_vec;

/// Chase camera in follow mode, damped orbit controller in free mode.
///
/// Only the camera entity and its controllers live here. The scene plugin
/// attaches the actual render camera.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera.in_set(StartupStage::BuildCameras))
            .add_systems(Update, (camera_toggle_system, orbit_input_system).chain())
            .add_systems(
                PostUpdate,
                (chase_camera_system, orbit_camera_system)
                    .before(TransformSystem::TransformPropagate),
            );
    }
}

fn spawn_camera(mut commands: Commands, config: Res<SessionConfig>, session: Res<FlightSession>) {
    let eye = to_render_vec(&config.camera.initial_eye);
    let target = to_render_vec(&session.position());

    commands.spawn((
        Name::new("Main Camera"),
        MainCamera,
        OrbitController::from_config(&config.camera.orbit),
        Transform::from_translation(eye).looking_at(target, Vec3::Y),
    ));
}
