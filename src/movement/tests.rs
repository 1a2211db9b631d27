//! Movement domain: tests for input sampling, locomotion, and gravity.

use bevy::input::ButtonInput;
use bevy::prelude::{IVec2, KeyCode, Vec2, Vec3};
use std::f32::consts::{FRAC_PI_2, PI};

use super::resources::MovementInput;
use super::systems::collisions::{settle_gravity, step_gravity};
use super::systems::input::sample_axes;
use super::systems::movement::{horizontal_direction, step_yaw, target_yaw};

const SMOOTHING: f32 = 0.2;
const GRAVITY: f32 = -8.8;
const JUMP_FORCE: f32 = 0.3;
const DT: f32 = 1.0 / 60.0;

fn keys(held: &[KeyCode]) -> ButtonInput<KeyCode> {
    let mut keyboard = ButtonInput::default();
    for &key in held {
        keyboard.press(key);
    }
    keyboard
}

// -----------------------------------------------------------------------------
// Input sampling
// -----------------------------------------------------------------------------

#[test]
fn test_idle_input_is_zero() {
    let mut input = MovementInput::default();
    sample_axes(&keys(&[]), SMOOTHING, &mut input);

    assert_eq!(input.smoothed, Vec2::ZERO);
    assert_eq!(input.axis, IVec2::ZERO);
    assert!(!input.jump_held);
}

#[test]
fn test_release_resets_smoothed_immediately() {
    let mut input = MovementInput {
        smoothed: Vec2::new(0.6, 0.0),
        ..Default::default()
    };
    sample_axes(&keys(&[]), SMOOTHING, &mut input);

    // Snap back to zero, not eased toward it
    assert_eq!(input.smoothed.x, 0.0);
}

#[test]
fn test_up_sets_sign_and_eases_value() {
    let mut input = MovementInput::default();
    sample_axes(&keys(&[KeyCode::ArrowUp]), SMOOTHING, &mut input);

    assert_eq!(input.axis, IVec2::new(0, 1));
    assert!((input.smoothed.y - 0.2).abs() < 1e-6);
}

#[test]
fn test_left_sets_negative_sign() {
    let mut input = MovementInput::default();
    sample_axes(&keys(&[KeyCode::ArrowLeft]), SMOOTHING, &mut input);

    assert_eq!(input.axis, IVec2::new(-1, 0));
    assert!((input.smoothed.x + 0.2).abs() < 1e-6);
}

#[test]
fn test_up_wins_over_down() {
    let mut input = MovementInput::default();
    sample_axes(
        &keys(&[KeyCode::ArrowUp, KeyCode::ArrowDown]),
        SMOOTHING,
        &mut input,
    );

    assert_eq!(input.axis.y, 1);
}

#[test]
fn test_left_wins_over_right() {
    let mut input = MovementInput::default();
    sample_axes(
        &keys(&[KeyCode::ArrowLeft, KeyCode::ArrowRight]),
        SMOOTHING,
        &mut input,
    );

    assert_eq!(input.axis.x, -1);
}

#[test]
fn test_smoothed_converges_monotonically() {
    let mut input = MovementInput::default();
    let held = keys(&[KeyCode::ArrowRight]);

    let mut previous = 0.0;
    for _ in 0..20 {
        sample_axes(&held, SMOOTHING, &mut input);
        assert!(input.smoothed.x > previous);
        assert!(input.smoothed.x <= 1.0);
        previous = input.smoothed.x;
    }
    assert!(input.smoothed.x > 0.98);
}

#[test]
fn test_signs_are_memoryless() {
    let mut input = MovementInput::default();
    let held = keys(&[KeyCode::ArrowRight]);
    for _ in 0..5 {
        sample_axes(&held, SMOOTHING, &mut input);
    }
    assert_eq!(input.axis.x, 1);

    sample_axes(&keys(&[]), SMOOTHING, &mut input);
    assert_eq!(input.axis, IVec2::ZERO);
}

#[test]
fn test_jump_flag_is_raw_key_state() {
    let mut input = MovementInput::default();
    sample_axes(&keys(&[KeyCode::Space]), SMOOTHING, &mut input);
    assert!(input.jump_held);

    sample_axes(&keys(&[]), SMOOTHING, &mut input);
    assert!(!input.jump_held);
}

// -----------------------------------------------------------------------------
// Movement integration
// -----------------------------------------------------------------------------

#[test]
fn test_no_input_yields_zero_direction() {
    let dir = horizontal_direction(Vec3::NEG_Z, Vec3::X, Vec2::ZERO);
    assert_eq!(dir, Vec3::ZERO);
}

#[test]
fn test_direction_is_horizontal_unit_vector() {
    let dir = horizontal_direction(Vec3::NEG_Z, Vec3::X, Vec2::new(0.7, 0.7));
    assert!((dir.length() - 1.0).abs() < 1e-5);
    assert_eq!(dir.y, 0.0);
}

#[test]
fn test_forward_input_moves_along_forward() {
    let dir = horizontal_direction(Vec3::NEG_Z, Vec3::X, Vec2::new(0.0, 0.5));
    assert!((dir - Vec3::NEG_Z).length() < 1e-5);
}

#[test]
fn test_vertical_component_is_discarded() {
    let forward = Vec3::new(0.0, -0.5, -0.5);
    let dir = horizontal_direction(forward, Vec3::X, Vec2::new(0.0, 1.0));
    assert_eq!(dir.y, 0.0);
}

#[test]
fn test_target_yaw_per_quadrant() {
    assert!((target_yaw(IVec2::new(0, -1))).abs() < 1e-6);
    assert!((target_yaw(IVec2::new(1, 0)) + FRAC_PI_2).abs() < 1e-6);
    assert!((target_yaw(IVec2::new(-1, 0)) - FRAC_PI_2).abs() < 1e-6);
    assert!((target_yaw(IVec2::new(0, 1)).abs() - PI).abs() < 1e-6);
}

#[test]
fn test_zero_axis_keeps_yaw() {
    assert!(step_yaw(1.25, IVec2::ZERO, 10.0, DT).is_none());
}

#[test]
fn test_yaw_eases_toward_target() {
    // Already on target: stays exactly there
    assert_eq!(step_yaw(0.0, IVec2::new(0, -1), 10.0, DT), Some(0.0));

    let yaw = step_yaw(0.0, IVec2::new(1, 0), 10.0, DT).unwrap();
    let expected = -FRAC_PI_2 * (10.0 * DT);
    assert!((yaw - expected).abs() < 1e-6);
}

#[test]
fn test_yaw_lerp_is_not_angle_wrapped() {
    // From near -π toward +π/2 the value travels back through zero rather
    // than wrapping across the boundary.
    let yaw = step_yaw(-3.0, IVec2::new(-1, 0), 10.0, DT).unwrap();
    assert!(yaw > -3.0);
    assert!(yaw < FRAC_PI_2);
}

// -----------------------------------------------------------------------------
// Gravity accumulator
// -----------------------------------------------------------------------------

#[test]
fn test_gravity_integrates_while_positive() {
    let after = step_gravity(JUMP_FORCE, false, DT, GRAVITY);
    assert!((after - (JUMP_FORCE + DT * GRAVITY)).abs() < 1e-6);
}

#[test]
fn test_non_positive_accumulator_stops_accelerating() {
    assert_eq!(step_gravity(0.0, false, DT, GRAVITY), 0.0);
    assert_eq!(step_gravity(-0.14, false, DT, GRAVITY), -0.14);
}

#[test]
fn test_grounded_skips_integration() {
    assert_eq!(step_gravity(JUMP_FORCE, true, DT, GRAVITY), JUMP_FORCE);
}

#[test]
fn test_ground_contact_zeroes_accumulator() {
    assert_eq!(settle_gravity(-0.5, true, false, JUMP_FORCE), 0.0);
}

#[test]
fn test_airborne_accumulator_carries_over() {
    assert_eq!(settle_gravity(-0.5, false, false, JUMP_FORCE), -0.5);
}

#[test]
fn test_jump_overrides_accumulator() {
    assert_eq!(settle_gravity(-2.0, false, true, JUMP_FORCE), JUMP_FORCE);
    assert_eq!(settle_gravity(0.0, true, true, JUMP_FORCE), JUMP_FORCE);
}

#[test]
fn test_jump_arc_reaches_constant_fall_rate() {
    // Integrate a jump until the accumulator crosses zero; from then on the
    // fall rate stays fixed until ground contact.
    let mut gravity = JUMP_FORCE;
    for _ in 0..10 {
        gravity = step_gravity(gravity, false, DT, GRAVITY);
    }
    assert!(gravity <= 0.0);

    let terminal = gravity;
    for _ in 0..10 {
        gravity = step_gravity(gravity, false, DT, GRAVITY);
    }
    assert_eq!(gravity, terminal);
}

// -----------------------------------------------------------------------------
// One frame of forward input, end to end
// -----------------------------------------------------------------------------

#[test]
fn test_first_frame_of_forward_input() {
    let mut input = MovementInput::default();
    sample_axes(&keys(&[KeyCode::ArrowUp]), SMOOTHING, &mut input);

    assert_eq!(input.axis, IVec2::new(0, 1));
    assert!((input.smoothed.y - 0.2).abs() < 1e-6);

    let dir = horizontal_direction(Vec3::NEG_Z, Vec3::X, input.smoothed);
    assert!((dir - Vec3::NEG_Z).length() < 1e-5);

    let target = target_yaw(input.axis);
    assert!((target.abs() - PI).abs() < 1e-6);
}
