use bevy::prelude::*;

use crate::components::MainCamera;
use crate::plugins::StartupStage;
use crate::resources::SessionConfig;
use crate::systems::{hex_color, spawn_airplane_model};

const SKY: u32 = 0x87CEEB;
const GRASS: u32 = 0x3A7D44;
const ASPHALT: u32 = 0x333333;
const MARKING: u32 = 0xFFFFFF;

/// Top of the ground plane. The flight model's altitude floor keeps the
/// airplane above it.
const GROUND_Y: f32 = -2.0;
const GROUND_SIZE: f32 = 1000.0;
const RUNWAY_WIDTH: f32 = 20.0;
const RUNWAY_LENGTH: f32 = 100.0;
const CENTER_STRIPES: usize = 20;

/// Minimal world for the flight: sky, lights, ground and a marked runway.
///
/// Also turns the main camera into a 3D render camera and builds the
/// airplane's model, so the flight and camera plugins can run without a
/// renderer.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(hex_color(SKY)))
            .insert_resource(AmbientLight {
                color: Color::WHITE,
                brightness: 400.0,
            })
            .add_systems(
                Startup,
                (
                    spawn_lights,
                    spawn_ground,
                    attach_render_camera,
                    spawn_airplane_model,
                )
                    .in_set(StartupStage::BuildScene),
            );
    }
}

fn spawn_lights(mut commands: Commands) {
    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(100.0, 300.0, 200.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        Name::new("Fill Light"),
        DirectionalLight {
            illuminance: 4_000.0,
            ..default()
        },
        Transform::from_xyz(-100.0, 200.0, -200.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn spawn_ground(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut flat = |meshes: &mut Assets<Mesh>, color: u32, size: Vec2, at: Vec3| {
        (
            Mesh3d(meshes.add(Plane3d::default().mesh().size(size.x, size.y))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: hex_color(color),
                perceptual_roughness: 0.7,
                ..default()
            })),
            Transform::from_translation(at),
        )
    };

    commands.spawn((
        Name::new("Ground"),
        flat(
            &mut *meshes,
            GRASS,
            Vec2::splat(GROUND_SIZE),
            Vec3::new(0.0, GROUND_Y, 0.0),
        ),
    ));

    commands
        .spawn((
            Name::new("Runway"),
            flat(
                &mut *meshes,
                ASPHALT,
                Vec2::new(RUNWAY_WIDTH, RUNWAY_LENGTH),
                Vec3::new(0.0, GROUND_Y + 0.01, 0.0),
            ),
        ))
        .with_children(|runway| {
            for i in 0..CENTER_STRIPES {
                runway.spawn(flat(
                    &mut *meshes,
                    MARKING,
                    Vec2::new(1.0, 3.0),
                    Vec3::new(0.0, 0.01, -47.5 + i as f32 * 5.0),
                ));
            }
            for side in [-1.0, 1.0] {
                runway.spawn(flat(
                    &mut *meshes,
                    MARKING,
                    Vec2::new(0.5, RUNWAY_LENGTH),
                    Vec3::new(side * (RUNWAY_WIDTH / 2.0 - 0.5), 0.01, 0.0),
                ));
            }
        });
}

fn attach_render_camera(
    mut commands: Commands,
    config: Res<SessionConfig>,
    query: Query<Entity, With<MainCamera>>,
) {
    let Ok(camera) = query.get_single() else {
        warn!("No main camera to render with");
        return;
    };
    commands.entity(camera).insert((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: (config.camera.fov as f32).to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
    ));
}
