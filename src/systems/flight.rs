use bevy::prelude::*;

use crate::components::{FlightConfig, FlightState};
use crate::resources::{ControlKey, FlightSession, InputSnapshot};
use crate::utils::{drive_rate, smooth_toward};

/// Advances the player's flight once per fixed tick.
pub fn flight_model_system(
    mut session: ResMut<FlightSession>,
    input: Res<InputSnapshot>,
) {
    session.tick(&input);

    let flight = &session.flight;
    trace!(
        "tick {}: speed={:.3} heading={:.3} altitude={:.3} vs={:.3}",
        session.ticks(),
        flight.speed,
        flight.heading,
        flight.altitude,
        flight.vertical_speed
    );
}

/// One tick of the arcade flight model.
///
/// Steps run in a fixed order because later ones read values written by
/// earlier ones. The near-ground test is taken once, from the altitude at the
/// start of the tick. Reset is applied last and overrides the rest of the tick.
/// The result has `position.y == altitude`.
pub fn update_flight(state: &mut FlightState, config: &FlightConfig, input: &InputSnapshot) {
    let held = |key| input.is_pressed(key);
    let near_ground = state.is_near_ground(config.ground_eps);

    if held(ControlKey::Brake) && near_ground {
        state.speed = 0.0;
    }

    if held(ControlKey::ThrottleUp) {
        state.speed += config.accel;
    }
    if held(ControlKey::ThrottleDown) {
        state.speed = if near_ground {
            (state.speed - config.accel).max(-config.reverse_speed_limit)
        } else {
            (state.speed - config.accel).max(config.min_air_speed)
        };
    }

    // Once airborne the airplane cannot stall or overspeed.
    if !near_ground {
        state.speed = state.speed.clamp(config.min_air_speed, config.max_air_speed);
    }

    state.heading_rate = drive_rate(
        state.heading_rate,
        held(ControlKey::YawLeft),
        held(ControlKey::YawRight),
        config.rot_accel,
        config.heading_decay,
        config.rot_accel,
    );
    state.heading += state.heading_rate;

    state.vertical_speed = drive_rate(
        state.vertical_speed,
        held(ControlKey::ClimbUp),
        held(ControlKey::ClimbDown),
        config.climb_accel,
        config.vertical_decay,
        config.max_vertical_speed,
    );

    // The floor acts on the target, so a descent glides onto it.
    state.target_altitude = (state.altitude + state.vertical_speed).max(config.min_target_altitude);
    state.altitude = smooth_toward(state.altitude, state.target_altitude, config.altitude_smoothing);

    // On the ground pitch and roll only decay, they skip the smoothing filter.
    if near_ground {
        state.target_pitch = 0.0;
        state.pitch *= config.ground_attitude_decay;
        state.target_roll = 0.0;
        state.roll *= config.ground_attitude_decay;
    } else {
        state.target_pitch = -state.vertical_speed * config.pitch_per_vertical_speed();
        state.pitch = smooth_toward(state.pitch, state.target_pitch, config.pitch_smoothing);
        state.target_roll = -state.heading_rate * config.roll_per_heading_rate();
        state.roll = smooth_toward(state.roll, state.target_roll, config.roll_smoothing);
    }

    if held(ControlKey::Reset) {
        state.reset(config.spawn);
    }

    let forward = state.forward();
    state.position.x += forward.x * state.speed;
    state.position.z += forward.z * state.speed;
    state.position.y = state.altitude;
}
