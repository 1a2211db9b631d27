//! Debug domain: overlay state.

use bevy::prelude::*;

/// Resource tracking debug overlay state
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Whether the info overlay is visible
    pub overlay_visible: bool,
    /// Whether world axes are drawn at the origin
    pub draw_axes: bool,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            overlay_visible: false,
            draw_axes: true,
        }
    }
}
