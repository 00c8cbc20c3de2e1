mod chase;
mod controller;
mod orbit;

pub use chase::chase_camera_system;
pub use controller::camera_toggle_system;
pub use orbit::{orbit_camera_system, orbit_input_system};
