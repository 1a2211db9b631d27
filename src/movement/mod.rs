//! Movement domain: input-driven locomotion, gravity, and ground detection.

mod bootstrap;
mod components;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{GameLayer, Ground, MovementState, Player};
pub use resources::{MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{integrate_movement, resolve_ground_and_gravity, sample_input};

/// Label for the per-frame movement chain so other domains can order
/// their systems against it.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MovementSystems;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (sample_input, integrate_movement, resolve_ground_and_gravity)
                    .chain()
                    .in_set(MovementSystems),
            );
    }
}
