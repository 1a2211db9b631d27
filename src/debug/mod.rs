//! Debug domain: runtime inspection for the movement demo.
//!
//! Features:
//! - World axis gizmos at the origin
//! - F1 info overlay with body state and sampled input

mod state;
mod systems;
mod ui;

pub use state::DebugState;

use bevy::prelude::*;

use crate::debug::systems::{draw_axes, toggle_overlay, update_overlay};
use crate::movement::MovementSystems;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (toggle_overlay, draw_axes))
            .add_systems(Update, update_overlay.after(MovementSystems));
    }
}
