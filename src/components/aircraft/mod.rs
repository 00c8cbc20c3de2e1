pub mod config;
pub mod state;
pub mod variant;

pub use config::FlightConfig;
pub use state::FlightState;
pub use variant::{AirplanePart, AirplaneVariant};
