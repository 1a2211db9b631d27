//! Config domain: settings definitions loaded from RON.

use serde::{Deserialize, Serialize};

use crate::camera::CameraTuning;
use crate::movement::MovementTuning;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SettingsDef {
    pub movement: MovementDef,
    pub camera: CameraDef,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementDef {
    pub input_smoothing: f32,
    pub turn_rate: f32,
    pub gravity: f32,
    pub jump_force: f32,
    pub ground_ray_length: f32,
}

impl Default for MovementDef {
    fn default() -> Self {
        let tuning = MovementTuning::default();
        Self {
            input_smoothing: tuning.input_smoothing,
            turn_rate: tuning.turn_rate,
            gravity: tuning.gravity,
            jump_force: tuning.jump_force,
            ground_ray_length: tuning.ground_ray_length,
        }
    }
}

impl MovementDef {
    pub fn apply(&self, tuning: &mut MovementTuning) {
        tuning.input_smoothing = self.input_smoothing;
        tuning.turn_rate = self.turn_rate;
        tuning.gravity = self.gravity;
        tuning.jump_force = self.jump_force;
        tuning.ground_ray_length = self.ground_ray_length;
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraDef {
    pub follow_smoothing: f32,
    pub tilt: f32,
    pub distance: f32,
    pub fov: f32,
}

impl Default for CameraDef {
    fn default() -> Self {
        let tuning = CameraTuning::default();
        Self {
            follow_smoothing: tuning.follow_smoothing,
            tilt: tuning.tilt,
            distance: tuning.distance,
            fov: tuning.fov,
        }
    }
}

impl CameraDef {
    pub fn apply(&self, tuning: &mut CameraTuning) {
        tuning.follow_smoothing = self.follow_smoothing;
        tuning.tilt = self.tilt;
        tuning.distance = self.distance;
        tuning.fov = self.fov;
    }
}
