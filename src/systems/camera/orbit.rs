use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;

use crate::components::OrbitController;
use crate::utils::to_render_vec;

/// Pixels per scroll line on pixel-precise devices.
const PIXELS_PER_LINE: f32 = 100.0;

/// Feeds mouse drag and wheel into enabled orbit controllers.
///
/// Left drag rotates, right drag pans, the wheel zooms.
pub fn orbit_input_system(
    buttons: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    scroll: Res<AccumulatedMouseScroll>,
    mut query: Query<&mut OrbitController>,
) {
    let drag = motion.delta;
    let lines = match scroll.unit {
        MouseScrollUnit::Line => scroll.delta.y,
        MouseScrollUnit::Pixel => scroll.delta.y / PIXELS_PER_LINE,
    };

    for mut orbit in query.iter_mut().filter(|orbit| orbit.enabled) {
        if drag != Vec2::ZERO {
            if buttons.pressed(MouseButton::Left) {
                orbit.rotate(drag.x as f64, drag.y as f64);
            } else if buttons.pressed(MouseButton::Right) {
                orbit.pan(drag.x as f64, drag.y as f64);
            }
        }
        if lines != 0.0 {
            orbit.zoom(lines as f64);
        }
    }
}

/// Applies damped orbit motion and writes the camera transform.
pub fn orbit_camera_system(mut query: Query<(&mut OrbitController, &mut Transform)>) {
    for (mut orbit, mut transform) in query.iter_mut() {
        if !orbit.enabled {
            continue;
        }
        orbit.step();
        transform.translation = to_render_vec(&orbit.eye());
        transform.look_at(to_render_vec(&orbit.target), Vec3::Y);
    }
}
