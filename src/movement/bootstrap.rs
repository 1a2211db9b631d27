//! Movement domain: player spawn.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MovementState, Player};

pub(crate) fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    info!("Spawning player at origin");

    commands
        .spawn((
            Player,
            MovementState::default(),
            Mesh3d(meshes.add(Cuboid::new(1.0, 1.0, 1.0))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.9, 0.9, 0.9),
                ..default()
            })),
            Transform::from_xyz(0.0, 0.0, 0.0),
            (
                RigidBody::Dynamic,
                Collider::cuboid(1.0, 1.0, 1.0),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(0.0), // gravity is handled by the movement systems
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
            ),
        ))
        .with_children(|player| {
            // Nose marker so facing is visible on an otherwise uniform cube
            player.spawn((
                Mesh3d(meshes.add(Cuboid::new(0.2, 0.2, 0.2))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgb(0.9, 0.2, 0.2),
                    ..default()
                })),
                Transform::from_xyz(0.0, 0.0, -0.5),
            ));
        });
}
