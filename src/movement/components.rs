//! Movement domain: player body components and physics layers.

use avian3d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Per-frame body state owned by the movement systems.
#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub grounded: bool,
    pub jumped: bool,
    pub falling: bool,
    /// Yaw in radians. Authoritative rotation; mirrored into the transform
    /// whenever it changes.
    pub yaw: f32,
    /// Vertical velocity contribution added to each frame's displacement.
    pub gravity: f32,
    /// Camera-relative movement direction for the current frame.
    pub move_direction: Vec3,
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;
