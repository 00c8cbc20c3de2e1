use bevy::prelude::*;

/// Ordered startup stages: the session must exist before the airplane, the
/// airplane before the camera that looks at it, and both before the scene
/// dresses them with meshes.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum StartupStage {
    BuildSession,
    BuildAircraft,
    BuildCameras,
    BuildScene,
}

pub struct StartupSequencePlugin;

impl Plugin for StartupSequencePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Startup,
            (
                StartupStage::BuildSession,
                StartupStage::BuildAircraft,
                StartupStage::BuildCameras,
                StartupStage::BuildScene,
            )
                .chain(),
        );
    }
}
