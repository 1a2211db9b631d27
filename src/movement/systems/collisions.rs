//! Movement domain: ground detection, gravity, and the collision-aware move.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MovementInput, MovementState, MovementTuning, Player};

pub(crate) fn resolve_ground_and_gravity(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    spatial_query: SpatialQuery,
    mut players: Query<(&Transform, &mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, mut state, mut velocity) in &mut players {
        let was_grounded = state.grounded;
        let contact = floor_raycast(
            &spatial_query,
            transform.translation,
            tuning.ground_ray_length,
            &ground_filter,
        );
        state.grounded = contact.is_some();

        match contact {
            Some(point) if !was_grounded => debug!("Landed at {:?}", point),
            None if was_grounded => debug!("Left ground"),
            _ => {}
        }

        let gravity = step_gravity(state.gravity, state.grounded, dt, tuning.gravity);

        // The controller works in per-frame displacements; the physics step
        // integrates velocities, so hand it displacement / dt.
        let displacement = state.move_direction + Vec3::Y * gravity;
        if dt > 0.0 {
            velocity.0 = displacement / dt;
        }

        state.gravity = settle_gravity(gravity, state.grounded, input.jump_held, tuning.jump_force);
        if input.jump_held {
            state.jumped = true;
            state.falling = false;
        }
    }
}

/// Advance the gravity accumulator for one airborne frame. Only integrates
/// while the accumulator is still positive; once it crosses zero the fall
/// continues at a constant rate until ground contact.
pub(crate) fn step_gravity(gravity: f32, grounded: bool, dt: f32, gravity_per_sec: f32) -> f32 {
    if !grounded && gravity > 0.0 {
        gravity + dt * gravity_per_sec
    } else {
        gravity
    }
}

/// Post-move accumulator update: ground contact clamps it to zero, and a
/// held jump key overrides it with the jump impulse.
pub(crate) fn settle_gravity(gravity: f32, grounded: bool, jump_held: bool, jump_force: f32) -> f32 {
    let gravity = if grounded { 0.0 } else { gravity };
    if jump_held {
        jump_force
    } else {
        gravity
    }
}

/// Cast a short ray straight down from `origin`. `Some(contact)` means the
/// body is grounded; a miss is the airborne signal, not an error.
pub(crate) fn floor_raycast(
    spatial_query: &SpatialQuery,
    origin: Vec3,
    length: f32,
    filter: &SpatialQueryFilter,
) -> Option<Vec3> {
    spatial_query
        .cast_ray(origin, Dir3::NEG_Y, length, true, filter)
        .map(|hit| origin - Vec3::Y * hit.distance)
}
