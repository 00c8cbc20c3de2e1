use bevy::prelude::*;

use crate::components::{AirplanePart, PlayerController};
use crate::resources::FlightSession;
use crate::utils::{to_render_quat, to_render_vec};

/// Projects the flight state onto the airplane's transform.
pub fn airplane_transform_system(
    session: Res<FlightSession>,
    mut query: Query<&mut Transform, With<PlayerController>>,
) {
    for mut transform in query.iter_mut() {
        transform.translation = to_render_vec(&session.position());
        transform.rotation = to_render_quat(&session.orientation());
    }
}

/// Builds the airplane model: one cuboid child per part of the player's variant.
pub fn spawn_airplane_model(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    query: Query<(Entity, &PlayerController), Without<Children>>,
) {
    for (entity, controller) in query.iter() {
        let parts = controller.variant.parts();
        info!(
            "Building {} model with {} parts",
            controller.variant.display_name(),
            parts.len()
        );
        commands
            .entity(entity)
            .insert(Visibility::default())
            .with_children(|parent| {
                for part in &parts {
                    parent.spawn((
                        Mesh3d(meshes.add(Cuboid::new(part.size[0], part.size[1], part.size[2]))),
                        MeshMaterial3d(materials.add(StandardMaterial {
                            base_color: hex_color(part.color),
                            perceptual_roughness: 0.6,
                            ..default()
                        })),
                        part_transform(part),
                    ));
                }
            });
    }
}

fn part_transform(part: &AirplanePart) -> Transform {
    let [rx, ry, rz] = part.rotation;
    Transform::from_translation(Vec3::from_array(part.offset))
        .with_rotation(Quat::from_euler(EulerRot::XYZ, rx, ry, rz))
}

/// 0xRRGGBB to an sRGB colour.
pub fn hex_color(rgb: u32) -> Color {
    Color::srgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color(0x87CEEB), Color::srgb_u8(0x87, 0xCE, 0xEB));
    }
}
