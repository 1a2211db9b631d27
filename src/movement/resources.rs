//! Movement domain: tuning and input resources.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    /// Easing factor applied to the axis values while a key is held.
    pub input_smoothing: f32,
    /// Yaw interpolation rate, multiplied by delta time each frame.
    pub turn_rate: f32,
    /// Acceleration applied to the gravity accumulator, per second.
    pub gravity: f32,
    /// Accumulator value set by a jump.
    pub jump_force: f32,
    /// Length of the downward ground-detection ray.
    pub ground_ray_length: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            input_smoothing: 0.2,
            turn_rate: 10.0,
            gravity: -8.8,
            jump_force: 0.3,
            ground_ray_length: 0.5,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// Eased axis values in [-1, 1]; x is horizontal, y is vertical.
    pub smoothed: Vec2,
    /// Instantaneous axis signs, each exactly one of -1, 0, 1.
    pub axis: IVec2,
    /// Raw held state of the jump key.
    pub jump_held: bool,
}
