pub mod aircraft;
pub mod camera;
pub mod controller;
pub mod orbit;

pub use aircraft::{AirplanePart, AirplaneVariant, FlightConfig, FlightState};
pub use camera::{CameraMode, CameraPose, ChaseCamera, MainCamera};
pub use controller::PlayerController;
pub use orbit::OrbitController;
