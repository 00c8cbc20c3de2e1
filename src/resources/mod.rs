pub mod config;
pub mod errors;
pub mod input;
pub mod session;

pub use config::{CameraConfig, OrbitConfig, SessionConfig};
pub use errors::ConfigError;
pub use input::{ControlKey, InputSnapshot, KeyBindings};
pub use session::FlightSession;
