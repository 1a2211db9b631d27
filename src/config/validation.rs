//! Config domain: range checks for loaded settings.

use super::data::SettingsDef;

/// A validation error with context about which field failed.
#[derive(Debug)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "settings field '{}': {}", self.field, self.message)
    }
}

/// Validate loaded settings. Returns a list of errors, empty if all values
/// are usable.
pub fn validate_settings(def: &SettingsDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_fraction(
        &mut errors,
        "movement.input_smoothing",
        def.movement.input_smoothing,
    );
    check_positive(&mut errors, "movement.turn_rate", def.movement.turn_rate);
    if !(def.movement.gravity < 0.0) {
        errors.push(ValidationError {
            field: "movement.gravity",
            message: format!("{} must be negative (downward)", def.movement.gravity),
        });
    }
    check_positive(&mut errors, "movement.jump_force", def.movement.jump_force);
    check_positive(
        &mut errors,
        "movement.ground_ray_length",
        def.movement.ground_ray_length,
    );

    check_fraction(
        &mut errors,
        "camera.follow_smoothing",
        def.camera.follow_smoothing,
    );
    if !def.camera.tilt.is_finite() {
        errors.push(ValidationError {
            field: "camera.tilt",
            message: format!("{} is not a finite angle", def.camera.tilt),
        });
    }
    check_positive(&mut errors, "camera.distance", def.camera.distance);
    if !(def.camera.fov > 0.0 && def.camera.fov < std::f32::consts::PI) {
        errors.push(ValidationError {
            field: "camera.fov",
            message: format!("{} is outside (0, pi)", def.camera.fov),
        });
    }

    errors
}

fn check_fraction(errors: &mut Vec<ValidationError>, field: &'static str, value: f32) {
    if !(value > 0.0 && value <= 1.0) {
        errors.push(ValidationError {
            field,
            message: format!("{} is outside (0, 1]", value),
        });
    }
}

fn check_positive(errors: &mut Vec<ValidationError>, field: &'static str, value: f32) {
    if !(value > 0.0) {
        errors.push(ValidationError {
            field,
            message: format!("{} must be positive", value),
        });
    }
}
