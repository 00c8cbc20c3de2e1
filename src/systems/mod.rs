mod camera;
mod flight;
mod input;
mod render;

pub use camera::{
    camera_toggle_system, chase_camera_system, orbit_camera_system, orbit_input_system,
};
pub use flight::{flight_model_system, update_flight};
pub use input::keyboard_snapshot_system;
pub use render::{airplane_transform_system, hex_color, spawn_airplane_model};
