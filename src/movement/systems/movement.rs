//! Movement domain: camera-relative locomotion and facing.

use bevy::math::FloatExt;
use bevy::prelude::*;

use crate::camera::CameraRoot;
use crate::movement::{MovementInput, MovementState, MovementTuning, Player};

pub(crate) fn integrate_movement(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    rig: Query<&Transform, (With<CameraRoot>, Without<Player>)>,
    mut players: Query<(&mut Transform, &mut MovementState), With<Player>>,
) {
    let Ok(rig_transform) = rig.single() else {
        return;
    };
    let dt = time.delta_secs();
    let forward = *rig_transform.forward();
    let right = *rig_transform.right();

    for (mut transform, mut state) in &mut players {
        state.move_direction = horizontal_direction(forward, right, input.smoothed);

        // Facing follows the raw signs, never the decaying eased values.
        if let Some(yaw) = step_yaw(state.yaw, input.axis, tuning.turn_rate, dt) {
            state.yaw = yaw;
            transform.rotation = Quat::from_rotation_y(yaw);
        }
    }
}

/// Camera-relative movement direction, flattened onto the ground plane.
pub(crate) fn horizontal_direction(forward: Vec3, right: Vec3, smoothed: Vec2) -> Vec3 {
    let combined = right * smoothed.x + forward * smoothed.y;
    let dir = combined.normalize_or_zero();
    Vec3::new(dir.x, 0.0, dir.z)
}

/// Heading for a discrete input pair.
pub(crate) fn target_yaw(axis: IVec2) -> f32 {
    -(axis.x as f32).atan2(-(axis.y as f32))
}

/// Ease the yaw toward the heading of `axis`, or `None` when there is no
/// input this frame and the facing must stay put. Plain linear interpolation
/// on the angle value; paths through ±π are not wrapped.
pub(crate) fn step_yaw(yaw: f32, axis: IVec2, turn_rate: f32, dt: f32) -> Option<f32> {
    if axis == IVec2::ZERO {
        return None;
    }
    Some(yaw.lerp(target_yaw(axis), turn_rate * dt))
}
