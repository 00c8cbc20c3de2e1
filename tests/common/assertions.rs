use bevy::math::Vec3;
use townflyer::components::{FlightConfig, FlightState};

/// Assert the invariants every tick must leave behind.
#[track_caller]
pub fn assert_flight_state_valid(state: &FlightState, config: &FlightConfig) {
    for (name, value) in [
        ("speed", state.speed),
        ("heading", state.heading),
        ("heading_rate", state.heading_rate),
        ("altitude", state.altitude),
        ("vertical_speed", state.vertical_speed),
        ("pitch", state.pitch),
        ("roll", state.roll),
    ] {
        assert!(value.is_finite(), "{name} is not finite: {value}");
    }
    assert!(
        state.position.iter().all(|v| v.is_finite()),
        "position is not finite: {:?}",
        state.position
    );

    assert_eq!(state.position.y, state.altitude, "position.y drifted from altitude");
    assert!(
        state.heading_rate.abs() <= config.rot_accel,
        "heading rate {} exceeds {}",
        state.heading_rate,
        config.rot_accel
    );
    assert!(
        state.vertical_speed.abs() <= config.max_vertical_speed,
        "vertical speed {} exceeds {}",
        state.vertical_speed,
        config.max_vertical_speed
    );
    assert!(
        state.pitch.abs() <= config.max_pitch + 1e-12,
        "pitch {} exceeds {}",
        state.pitch,
        config.max_pitch
    );
    assert!(
        state.roll.abs() <= config.max_roll + 1e-12,
        "roll {} exceeds {}",
        state.roll,
        config.max_roll
    );
    assert!(state.speed >= -config.reverse_speed_limit - 1e-12);
}

#[track_caller]
pub fn assert_render_vec_eq(actual: Vec3, expected: Vec3, epsilon: f32) {
    assert!(
        (actual - expected).length() <= epsilon,
        "expected {expected:?}, got {actual:?}"
    );
}
