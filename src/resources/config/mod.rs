pub mod camera;
pub mod session;

pub use camera::{CameraConfig, OrbitConfig};
pub use session::SessionConfig;
