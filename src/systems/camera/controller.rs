use bevy::prelude::*;

use crate::components::{MainCamera, OrbitController};
use crate::resources::{ControlKey, FlightSession, InputSnapshot};
use crate::utils::from_render_vec;

/// Handles the camera toggle key.
///
/// Entering free mode anchors the orbit controller on the airplane once and
/// keeps the current eye so the view does not jump. Entering follow mode just
/// disables the orbit controller.
pub fn camera_toggle_system(
    mut session: ResMut<FlightSession>,
    mut input: ResMut<InputSnapshot>,
    mut camera_query: Query<(&Transform, &mut OrbitController), With<MainCamera>>,
) {
    if !input.take_press(ControlKey::ToggleCamera) {
        return;
    }

    let anchor = session.toggle_camera();
    info!("Camera mode: {:?}", session.camera_mode());

    let Ok((transform, mut orbit)) = camera_query.get_single_mut() else {
        warn!("No main camera found to hand over");
        return;
    };

    match anchor {
        Some(target) => {
            orbit.anchor(target);
            orbit.sync_from_eye(from_render_vec(transform.translation));
            orbit.enabled = true;
            debug!("Orbit anchored at {:?}", target);
        }
        None => orbit.enabled = false,
    }
}
