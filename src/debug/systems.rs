//! Debug domain: overlay toggle, overlay refresh, and axis gizmos.

use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::debug::ui::{DebugOverlay, DebugOverlayText, spawn_debug_overlay};
use crate::movement::{MovementInput, MovementState, Player};

/// Toggle the info overlay with F1
pub(crate) fn toggle_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing: Query<Entity, With<DebugOverlay>>,
) {
    if !keyboard.just_pressed(KeyCode::F1) {
        return;
    }

    debug_state.overlay_visible = !debug_state.overlay_visible;
    if debug_state.overlay_visible {
        spawn_debug_overlay(&mut commands);
    } else {
        for entity in &existing {
            commands.entity(entity).despawn();
        }
    }
}

pub(crate) fn update_overlay(
    debug_state: Res<DebugState>,
    input: Res<MovementInput>,
    player: Query<(&Transform, &MovementState), With<Player>>,
    mut text: Query<&mut Text, With<DebugOverlayText>>,
) {
    if !debug_state.overlay_visible {
        return;
    }
    let Ok((transform, state)) = player.single() else {
        return;
    };

    for mut block in &mut text {
        block.0 = format!(
            "pos: ({:.2}, {:.2}, {:.2})\n\
             yaw: {:.3} rad\n\
             gravity: {:.3}\n\
             grounded: {}  jumped: {}  falling: {}\n\
             smoothed: ({:.2}, {:.2})\n\
             axis: ({}, {})  jump: {}",
            transform.translation.x,
            transform.translation.y,
            transform.translation.z,
            state.yaw,
            state.gravity,
            state.grounded,
            state.jumped,
            state.falling,
            input.smoothed.x,
            input.smoothed.y,
            input.axis.x,
            input.axis.y,
            input.jump_held,
        );
    }
}

/// World axes at the origin: X red, Y green, Z blue
pub(crate) fn draw_axes(debug_state: Res<DebugState>, mut gizmos: Gizmos) {
    if !debug_state.draw_axes {
        return;
    }

    gizmos.line(Vec3::ZERO, Vec3::X * 5.0, Color::srgb(0.9, 0.2, 0.2));
    gizmos.line(Vec3::ZERO, Vec3::Y * 5.0, Color::srgb(0.2, 0.9, 0.2));
    gizmos.line(Vec3::ZERO, Vec3::Z * 5.0, Color::srgb(0.2, 0.4, 0.9));
}
