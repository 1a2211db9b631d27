//! Movement domain: system modules for the per-frame update chain.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::resolve_ground_and_gravity;
pub(crate) use input::sample_input;
pub(crate) use movement::integrate_movement;
