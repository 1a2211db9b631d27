//! Config domain: startup settings loading and application.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{CameraDef, MovementDef, SettingsDef};
pub use loader::SettingsLoadError;

use bevy::prelude::*;
use std::path::Path;

use crate::camera::CameraTuning;
use crate::config::loader::load_settings;
use crate::config::validation::validate_settings;
use crate::movement::MovementTuning;

const SETTINGS_PATH: &str = "assets/settings.ron";

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, apply_settings);
    }
}

/// Load the settings file before anything spawns. The tuning resources keep
/// their compiled defaults when the file is missing or invalid.
fn apply_settings(mut movement: ResMut<MovementTuning>, mut camera: ResMut<CameraTuning>) {
    let path = Path::new(SETTINGS_PATH);
    let def = match load_settings(path) {
        Ok(def) => def,
        Err(e) => {
            warn!("{}; using default tuning", e);
            return;
        }
    };

    let errors = validate_settings(&def);
    if !errors.is_empty() {
        for error in &errors {
            error!("{}", error);
        }
        warn!("Rejected {}; using default tuning", path.display());
        return;
    }

    def.movement.apply(&mut movement);
    def.camera.apply(&mut camera);
    info!("Loaded tuning from {}", path.display());
}
