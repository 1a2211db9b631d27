//! Camera domain: fixed-angle follow rig.

mod follow;
mod rig;


pub use rig::{CameraRoot, CameraTilt};

use bevy::prelude::*;

use crate::camera::follow::follow_player;
use crate::camera::rig::setup_camera_rig;
use crate::movement::MovementSystems;

#[derive(Resource, Debug, Clone)]
pub struct CameraTuning {
    /// Interpolation fraction for the per-frame position chase.
    pub follow_smoothing: f32,
    /// Fixed downward pitch of the rig, radians.
    pub tilt: f32,
    /// Distance from the rig origin to the camera along the tilted axis.
    pub distance: f32,
    /// Vertical field of view, radians.
    pub fov: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            follow_smoothing: 0.4,
            tilt: 0.5934119456780721,
            distance: 30.0,
            fov: 0.47350045992678597,
        }
    }
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraTuning>()
            .add_systems(Startup, setup_camera_rig)
            .add_systems(Update, follow_player.after(MovementSystems));
    }
}
