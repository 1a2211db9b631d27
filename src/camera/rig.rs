//! Camera domain: rig hierarchy setup.

use bevy::prelude::*;

use crate::camera::CameraTuning;

/// Root of the camera rig. Position-only: it chases the player on the
/// ground plane and is never rotated.
#[derive(Component, Debug)]
pub struct CameraRoot;

/// Fixed-pitch node between the root and the camera.
#[derive(Component, Debug)]
pub struct CameraTilt;

pub(crate) fn setup_camera_rig(mut commands: Commands, tuning: Res<CameraTuning>) {
    commands
        .spawn((CameraRoot, Transform::IDENTITY, Visibility::default()))
        .with_children(|root| {
            // Negative pitch swings the camera up and over so it looks down
            // at the rig origin.
            root.spawn((
                CameraTilt,
                Transform::from_rotation(Quat::from_rotation_x(-tuning.tilt)),
                Visibility::default(),
            ))
            .with_children(|tilt| {
                // The rig never rotates, so a fixed local orientation keeps
                // the camera aimed at the rig origin every frame.
                tilt.spawn((
                    Camera3d::default(),
                    Projection::from(PerspectiveProjection {
                        fov: tuning.fov,
                        ..default()
                    }),
                    Transform::from_xyz(0.0, 0.0, tuning.distance),
                ));
            });
        });
}
