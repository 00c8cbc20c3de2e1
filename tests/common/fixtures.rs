use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use townflyer::{
    components::{AirplaneVariant, FlightState},
    resources::{ControlKey, InputSnapshot, SessionConfig},
};

/// Flight controls only; toggling the camera does not touch the flight state.
pub const FLIGHT_KEYS: [ControlKey; 8] = [
    ControlKey::ThrottleUp,
    ControlKey::ThrottleDown,
    ControlKey::YawLeft,
    ControlKey::YawRight,
    ControlKey::ClimbUp,
    ControlKey::ClimbDown,
    ControlKey::Reset,
    ControlKey::Brake,
];

pub fn create_test_session_config() -> SessionConfig {
    SessionConfig {
        variant: AirplaneVariant::Bimotor,
        ..Default::default()
    }
}

/// Cruising flight well above the ground.
pub fn create_cruise_state() -> FlightState {
    let mut state = FlightState::default();
    state.speed = 0.35;
    state.heading = 0.4;
    state.altitude = 60.0;
    state.target_altitude = 60.0;
    state.vertical_speed = 0.4;
    state.heading_rate = -0.02;
    state.pitch = -0.2;
    state.roll = 0.3;
    state.position.y = 60.0;
    state
}

/// Seeded random key combinations. Reset is rare so flights get somewhere.
pub fn random_inputs(seed: u64, count: usize) -> Vec<InputSnapshot> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let mut snapshot = InputSnapshot::new();
            for key in FLIGHT_KEYS {
                let chance = if key == ControlKey::Reset { 0.01 } else { 0.4 };
                snapshot.set(key, rng.gen_bool(chance));
            }
            snapshot
        })
        .collect()
}
