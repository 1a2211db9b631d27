//! Camera domain: per-frame position chase.

use bevy::prelude::*;

use crate::camera::{CameraRoot, CameraTuning};
use crate::movement::Player;

pub(crate) fn follow_player(
    tuning: Res<CameraTuning>,
    player: Query<&Transform, (With<Player>, Without<CameraRoot>)>,
    mut rig: Query<&mut Transform, With<CameraRoot>>,
) {
    let Ok(player_transform) = player.single() else {
        return;
    };

    for mut root in &mut rig {
        root.translation = follow_step(
            root.translation,
            player_transform.translation,
            tuning.follow_smoothing,
        );
    }
}

/// One step of the chase: ease toward the player's ground position,
/// ignoring its height.
pub(crate) fn follow_step(current: Vec3, player: Vec3, smoothing: f32) -> Vec3 {
    current.lerp(Vec3::new(player.x, 0.0, player.z), smoothing)
}
