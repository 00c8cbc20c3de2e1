use bevy::input::InputSystem;
use bevy::prelude::*;

use crate::components::PlayerController;
use crate::plugins::StartupStage;
use crate::resources::{FlightSession, InputSnapshot, SessionConfig};
use crate::systems::{airplane_transform_system, flight_model_system, keyboard_snapshot_system};
use crate::utils::to_render_vec;

/// Per-tick ordering inside `FixedUpdate`.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    /// Advance the flight state.
    Update,
    /// Copy the flight state onto the airplane's transform.
    Project,
}

/// Flight session, keyboard snapshot and the fixed-step flight model.
pub struct FlightPlugin {
    config: SessionConfig,
}

impl FlightPlugin {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }
}

impl Default for FlightPlugin {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .insert_resource(self.config.bindings.clone())
            .init_resource::<InputSnapshot>()
            .add_systems(
                Startup,
                start_session.in_set(StartupStage::BuildSession),
            )
            .add_systems(
                Startup,
                spawn_airplane.in_set(StartupStage::BuildAircraft),
            )
            .configure_sets(FixedUpdate, (FlightSet::Update, FlightSet::Project).chain())
            .add_systems(PreUpdate, keyboard_snapshot_system.after(InputSystem))
            .add_systems(
                FixedUpdate,
                (
                    flight_model_system.in_set(FlightSet::Update),
                    airplane_transform_system.in_set(FlightSet::Project),
                ),
            );

        app.insert_resource(Time::<Fixed>::from_hz(self.config.tick_hz));
    }
}

fn start_session(mut commands: Commands, config: Res<SessionConfig>) {
    let session = FlightSession::new(&config);
    info!(
        "Starting flight session: {} at {:?}, {} ticks/s",
        session.variant.display_name(),
        session.position(),
        config.tick_hz
    );
    commands.insert_resource(session);
}

fn spawn_airplane(mut commands: Commands, session: Res<FlightSession>) {
    commands.spawn((
        Name::new(session.variant.display_name()),
        PlayerController::new(session.variant),
        Transform::from_translation(to_render_vec(&session.position())),
    ));
}
