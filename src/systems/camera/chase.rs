use bevy::prelude::*;

use crate::components::MainCamera;
use crate::resources::FlightSession;
use crate::utils::to_render_vec;

/// Places the main camera on the chase rig while in follow mode.
pub fn chase_camera_system(
    session: Res<FlightSession>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let Some(pose) = session.camera_pose() else {
        return;
    };
    if let Ok(mut transform) = camera_query.get_single_mut() {
        transform.translation = to_render_vec(&pose.eye);
        transform.look_at(to_render_vec(&pose.look_at), Vec3::Y);
    }
}
