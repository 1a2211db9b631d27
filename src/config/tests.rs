//! Config domain: tests for settings parsing, defaults, and validation.

use super::data::{CameraDef, MovementDef, SettingsDef};
use super::loader::{load_settings, parse_settings};
use super::validation::validate_settings;

#[test]
fn test_movement_defaults_match_shipped_constants() {
    let def = MovementDef::default();
    assert_eq!(def.input_smoothing, 0.2);
    assert_eq!(def.turn_rate, 10.0);
    assert_eq!(def.gravity, -8.8);
    assert_eq!(def.jump_force, 0.3);
    assert_eq!(def.ground_ray_length, 0.5);
}

#[test]
fn test_camera_defaults_match_shipped_constants() {
    let def = CameraDef::default();
    assert_eq!(def.follow_smoothing, 0.4);
    assert_eq!(def.distance, 30.0);
}

#[test]
fn test_parse_full_settings() {
    let text = r#"(
        movement: (
            input_smoothing: 0.25,
            turn_rate: 8.0,
            gravity: -9.0,
            jump_force: 0.4,
            ground_ray_length: 0.6,
        ),
        camera: (
            follow_smoothing: 0.5,
            tilt: 0.6,
            distance: 25.0,
            fov: 0.5,
        ),
    )"#;

    let def = parse_settings(text).unwrap();
    assert_eq!(def.movement.turn_rate, 8.0);
    assert_eq!(def.movement.gravity, -9.0);
    assert_eq!(def.camera.distance, 25.0);
}

#[test]
fn test_parse_partial_settings_fills_defaults() {
    let def = parse_settings("(movement: (jump_force: 0.5))").unwrap();
    assert_eq!(def.movement.jump_force, 0.5);
    assert_eq!(def.movement.gravity, -8.8);
    assert_eq!(def.camera.follow_smoothing, 0.4);
}

#[test]
fn test_parse_error_is_reported() {
    assert!(parse_settings("(movement: oops)").is_err());
}

#[test]
fn test_load_missing_file_is_an_error() {
    let error = load_settings(std::path::Path::new("does/not/exist.ron")).unwrap_err();
    assert!(error.to_string().contains("does/not/exist.ron"));
}

#[test]
fn test_validation_accepts_defaults() {
    assert!(validate_settings(&SettingsDef::default()).is_empty());
}

#[test]
fn test_validation_rejects_out_of_range_values() {
    let mut def = SettingsDef::default();
    def.movement.input_smoothing = 1.5;
    def.movement.gravity = 2.0;
    def.camera.follow_smoothing = 0.0;

    let errors = validate_settings(&def);
    assert_eq!(errors.len(), 3);
}

#[test]
fn test_validation_reports_field_names() {
    let mut def = SettingsDef::default();
    def.camera.fov = 4.0;

    let errors = validate_settings(&def);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].to_string().contains("camera.fov"));
}
