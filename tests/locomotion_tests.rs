//! Locomotion Tests
//!
//! Tests for:
//! - MoveCommand issuance: facing computation, retargeting, degenerate targets
//! - The Idle ⇄ Moving state machine (arrival, retarget-without-idle)
//! - Steering: fixed-speed translation with no overshoot, bounded turn rate,
//!   deterministic trajectories

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use glam::{Quat, Vec3};

use mannequin::animation::{AnimationClip, AnimationMixer};
use mannequin::assets::ClipRegistry;
use mannequin::locomotion::{self, LocomotionController, LocomotionState};
use mannequin::scene::AnimatedCharacter;

const EPSILON: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn approx_vec(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < EPSILON
}

fn make_character() -> AnimatedCharacter {
    let mut registry = ClipRegistry::new();
    registry.insert(AnimationClip::looping("idle", 4.3));
    registry.insert(AnimationClip::looping("walking", 1.1));
    AnimatedCharacter::from_registry("dummy", &registry, &["idle", "walking"])
        .expect("all clips registered")
}

fn make_mixer() -> AnimationMixer {
    AnimationMixer::new(0.25, "idle")
}

// ============================================================================
// set_target
// ============================================================================

#[test]
fn set_target_computes_facing_without_rotating() {
    let controller = LocomotionController::default();
    let mut character = make_character();

    controller.set_target(&mut character, Vec3::new(3.0, 0.0, 3.0));

    let command = character.move_command().expect("command is active");
    let expected = Quat::from_rotation_y(FRAC_PI_4);
    assert!(
        command.target_orientation.angle_between(expected) < 1e-3,
        "facing should yaw toward the target"
    );
    assert!(
        character.transform.rotation.angle_between(Quat::IDENTITY) < 1e-6,
        "issuing a command must not rotate the character"
    );
}

#[test]
fn set_target_ignores_vertical_component() {
    let controller = LocomotionController::default();
    let mut character = make_character();

    // Straight ahead but far above: facing must stay level
    controller.set_target(&mut character, Vec3::new(0.0, 5.0, 4.0));
    let command = character.move_command().expect("command is active");
    assert!(
        command.target_orientation.angle_between(Quat::IDENTITY) < 1e-3,
        "vertical offset must not pitch the target facing"
    );
}

#[test]
fn set_target_on_own_position_keeps_facing() {
    let controller = LocomotionController::default();
    let mut character = make_character();
    let facing = Quat::from_rotation_y(1.0);
    character.transform.rotation = facing;

    let own_position = character.transform.position;
    controller.set_target(&mut character, own_position);

    let command = character.move_command().expect("command is active");
    assert!(
        command.target_orientation.angle_between(facing) < 1e-6,
        "a degenerate target keeps the current facing"
    );
}

// ============================================================================
// State machine
// ============================================================================

#[test]
fn initial_state_is_idle_and_idle_tick_is_noop() {
    let controller = LocomotionController::default();
    let mixer = make_mixer();
    let mut character = make_character();

    assert_eq!(controller.state(&character), LocomotionState::Idle);

    controller.tick(&mixer, &mut character, 0.016);
    assert!(approx_vec(character.transform.position, Vec3::ZERO));
    assert_eq!(
        character.current_action_name(),
        None,
        "an idle tick must not request animations"
    );
}

#[test]
fn arrival_idempotence() {
    let controller = LocomotionController::default();
    let mixer = make_mixer();
    let mut character = make_character();

    // Target exactly at the current position
    controller.set_target(&mut character, Vec3::ZERO);
    assert_eq!(controller.state(&character), LocomotionState::Moving);

    controller.tick(&mixer, &mut character, 0.016);

    assert_eq!(controller.state(&character), LocomotionState::Idle);
    assert_eq!(character.current_action_name(), Some("idle"));
    assert!(
        approx_vec(character.transform.position, Vec3::ZERO),
        "arrival at the spawn point must not move the character"
    );
}

#[test]
fn retarget_without_idle() {
    let controller = LocomotionController::default();
    let mixer = make_mixer();
    let mut character = make_character();

    controller.set_target(&mut character, Vec3::new(0.0, 0.0, 5.0));
    controller.tick(&mixer, &mut character, 0.1);
    assert_eq!(controller.state(&character), LocomotionState::Moving);

    // Retarget mid-walk: stays Moving, command swaps immediately
    let new_target = Vec3::new(4.0, 0.0, 0.0);
    controller.set_target(&mut character, new_target);
    assert_eq!(controller.state(&character), LocomotionState::Moving);

    let command = character.move_command().expect("command is active");
    assert!(approx_vec(command.target_position, new_target));
    // Yaw that faces +X from the +Z rest facing
    let expected = Quat::from_rotation_y(FRAC_PI_2);
    assert!(
        command.target_orientation.angle_between(expected) < 1e-2,
        "facing updates to the new target immediately"
    );

    controller.tick(&mixer, &mut character, 0.1);
    assert_eq!(controller.state(&character), LocomotionState::Moving);
}

// ============================================================================
// Steering
// ============================================================================

#[test]
fn tick_requests_gait_and_walks_toward_target() {
    let controller = LocomotionController::default();
    let mixer = make_mixer();
    let mut character = make_character();

    controller.set_target(&mut character, Vec3::new(0.0, 0.0, 2.0));
    controller.tick(&mixer, &mut character, 0.1);

    assert_eq!(character.current_action_name(), Some("walking"));
    // speed 2.0 * dt 0.1 along +Z
    assert!(approx_vec(
        character.transform.position,
        Vec3::new(0.0, 0.0, 0.2)
    ));
}

#[test]
fn trajectory_is_deterministic() {
    let controller = LocomotionController::default();
    let mixer = make_mixer();
    let mut character = make_character();
    let target = Vec3::new(0.0, 0.0, 3.0);

    controller.set_target(&mut character, target);
    for _ in 0..100 {
        controller.tick(&mixer, &mut character, 0.01);
    }

    // start + min(speed * T, distance) * direction = 2.0 along +Z
    let expected = Vec3::new(0.0, 0.0, 2.0);
    assert!(
        (character.transform.position - expected).length() < 1e-3,
        "expected {expected}, got {}",
        character.transform.position
    );
    assert_eq!(controller.state(&character), LocomotionState::Moving);
}

#[test]
fn translation_never_overshoots() {
    let controller = LocomotionController::default();
    let mixer = make_mixer();
    let mut character = make_character();
    let target = Vec3::new(0.0, 0.0, 1.0);

    controller.set_target(&mut character, target);
    // One huge step: 2.0 * 5.0 = 10 units of travel against 1 unit of distance
    controller.tick(&mixer, &mut character, 5.0);

    assert!(
        approx_vec(character.transform.position, target),
        "the step clamps exactly at the target"
    );

    // The follow-up tick observes arrival
    controller.tick(&mixer, &mut character, 0.016);
    assert_eq!(controller.state(&character), LocomotionState::Idle);
    assert_eq!(character.current_action_name(), Some("idle"));
}

#[test]
fn walks_all_the_way_and_settles_idle() {
    let controller = LocomotionController::default();
    let mixer = make_mixer();
    let mut character = make_character();
    let target = Vec3::new(1.5, 0.0, -2.0);

    controller.set_target(&mut character, target);
    for _ in 0..200 {
        controller.tick(&mixer, &mut character, 0.016);
        mixer.tick(&mut character, 0.016);
    }

    assert_eq!(controller.state(&character), LocomotionState::Idle);
    assert_eq!(character.current_action_name(), Some("idle"));
    let offset = character.transform.position - target;
    let planar_error = Vec3::new(offset.x, 0.0, offset.z).length();
    assert!(
        planar_error <= locomotion::DEFAULT_ARRIVAL_THRESHOLD + EPSILON,
        "settled {planar_error} away from the target"
    );
}

#[test]
fn rotation_turns_at_bounded_rate_without_overshoot() {
    let controller = LocomotionController::default();
    let mixer = make_mixer();
    let mut character = make_character();

    // Target directly behind: a half-turn
    controller.set_target(&mut character, Vec3::new(0.0, 0.0, -5.0));
    let command = *character.move_command().expect("command is active");

    let mut previous_angle = character
        .transform
        .rotation
        .angle_between(command.target_orientation);
    assert!(approx(previous_angle, PI));

    for _ in 0..50 {
        controller.tick(&mixer, &mut character, 0.01);
        let angle = character
            .transform
            .rotation
            .angle_between(command.target_orientation);
        assert!(
            angle <= previous_angle + EPSILON,
            "the facing error must shrink monotonically"
        );
        // 8 rad/s * 0.01 s per tick, never more
        assert!(
            previous_angle - angle <= 0.08 + 1e-3,
            "turned faster than the rate bound"
        );
        previous_angle = angle;
    }

    assert!(
        previous_angle < 1e-3,
        "half a second at 8 rad/s covers a half-turn, residual {previous_angle}"
    );
}

#[test]
fn rotate_towards_lands_exactly() {
    let from = Quat::IDENTITY;
    let to = Quat::from_rotation_y(0.3);

    let stepped = locomotion::rotate_towards(from, to, 0.5);
    assert!(
        stepped.angle_between(to) < 1e-6,
        "within range the rotation snaps to the target"
    );

    let partial = locomotion::rotate_towards(from, to, 0.1);
    assert!(
        approx(partial.angle_between(from), 0.1),
        "out of range the rotation advances by the bound"
    );
}
