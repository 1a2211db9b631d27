//! Movement domain: input sampling for locomotion.

use bevy::math::FloatExt;
use bevy::prelude::*;

use crate::movement::{MovementInput, MovementTuning};

pub(crate) fn sample_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    tuning: Res<MovementTuning>,
    mut input: ResMut<MovementInput>,
) {
    sample_axes(&keyboard, tuning.input_smoothing, &mut input);
}

/// Turn raw key state into eased axis values plus the instantaneous signs.
///
/// An eased value chases its target while a key is held and snaps straight
/// back to zero on release; the signs reflect only this frame's keys.
pub(crate) fn sample_axes(
    keyboard: &ButtonInput<KeyCode>,
    smoothing: f32,
    input: &mut MovementInput,
) {
    if keyboard.pressed(KeyCode::ArrowUp) {
        input.smoothed.y = input.smoothed.y.lerp(1.0, smoothing);
        input.axis.y = 1;
    } else if keyboard.pressed(KeyCode::ArrowDown) {
        input.smoothed.y = input.smoothed.y.lerp(-1.0, smoothing);
        input.axis.y = -1;
    } else {
        input.smoothed.y = 0.0;
        input.axis.y = 0;
    }

    if keyboard.pressed(KeyCode::ArrowLeft) {
        input.smoothed.x = input.smoothed.x.lerp(-1.0, smoothing);
        input.axis.x = -1;
    } else if keyboard.pressed(KeyCode::ArrowRight) {
        input.smoothed.x = input.smoothed.x.lerp(1.0, smoothing);
        input.axis.x = 1;
    } else {
        input.smoothed.x = 0.0;
        input.axis.x = 0;
    }

    input.jump_held = keyboard.pressed(KeyCode::Space);
}
