//! Click-to-move steering for one character.
//!
//! A [`MoveCommand`] records where the character should go and which way it
//! should end up facing; the [`LocomotionController`] walks the transform
//! toward the target each tick and keeps the gait animation requested while
//! underway. Movement is planar: targets come from ground-plane clicks and
//! the vertical component never changes.

use glam::{Quat, Vec3};

use crate::animation::AnimationMixer;
use crate::scene::AnimatedCharacter;

/// Default ground speed in length units per second.
pub const DEFAULT_SPEED: f32 = 2.0;
/// Planar distance below which a move command counts as arrived.
pub const DEFAULT_ARRIVAL_THRESHOLD: f32 = 0.05;
/// Maximum turn rate in radians per second.
pub const DEFAULT_TURN_RATE: f32 = 8.0;

/// Transient move-to-point order. At most one exists per character; a new
/// `set_target` call overwrites it without queueing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveCommand {
    pub target_position: Vec3,
    /// Facing computed once at issue time: yaw toward the target, vertical
    /// component ignored.
    pub target_orientation: Quat,
}

/// Per-character movement state, derived from the outstanding command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocomotionState {
    Idle,
    Moving,
}

/// Move-to-point state machine: `Idle ⇄ Moving`.
///
/// `Idle → Moving` on [`set_target`](Self::set_target); `Moving → Idle` on
/// arrival; a retarget while moving stays in `Moving` and never dips through
/// `Idle`. Given the same `dt` sequence and starting state the trajectory is
/// fully deterministic.
pub struct LocomotionController {
    speed: f32,
    arrival_threshold: f32,
    turn_rate: f32,
    gait_clip: String,
    idle_clip: String,
}

impl LocomotionController {
    #[must_use]
    pub fn new(
        speed: f32,
        arrival_threshold: f32,
        turn_rate: f32,
        gait_clip: impl Into<String>,
        idle_clip: impl Into<String>,
    ) -> Self {
        Self {
            speed,
            arrival_threshold,
            turn_rate,
            gait_clip: gait_clip.into(),
            idle_clip: idle_clip.into(),
        }
    }

    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// The single fixed gait requested while underway. The repertoire may
    /// carry faster gaits; none are wired to distance or speed.
    #[must_use]
    pub fn gait_clip(&self) -> &str {
        &self.gait_clip
    }

    #[must_use]
    pub fn state(&self, character: &AnimatedCharacter) -> LocomotionState {
        if character.command.is_some() {
            LocomotionState::Moving
        } else {
            LocomotionState::Idle
        }
    }

    /// Issues a move order toward `point`.
    ///
    /// The target orientation is computed here (face the point, vertical
    /// component ignored) without touching the character's current
    /// orientation; the tick turns toward it over time. Any finite point is
    /// accepted. A target on top of the character keeps the current facing
    /// and the next tick will simply arrive.
    pub fn set_target(&self, character: &mut AnimatedCharacter, point: Vec3) {
        let to_target = point - character.transform.position;
        let flat = Vec3::new(to_target.x, 0.0, to_target.z);

        let target_orientation = if flat.length_squared() > 1e-8 {
            // Characters face +Z at identity; yaw around Y toward the target
            Quat::from_rotation_y(flat.x.atan2(flat.z))
        } else {
            character.transform.rotation
        };

        log::debug!(
            "'{}' ordered to ({:.2}, {:.2}, {:.2})",
            character.name,
            point.x,
            point.y,
            point.z
        );

        character.command = Some(MoveCommand {
            target_position: point,
            target_orientation,
        });
    }

    /// Advances the character toward its target by `dt` seconds.
    ///
    /// Does nothing while idle. On arrival (planar distance at or below the
    /// threshold) the command deactivates and the idle animation is
    /// requested; otherwise the gait animation is requested, the position
    /// advances at fixed speed clamped at the target, and the orientation
    /// turns toward the command's facing without overshooting.
    pub fn tick(&self, mixer: &AnimationMixer, character: &mut AnimatedCharacter, dt: f32) {
        let Some(command) = character.command else {
            return;
        };

        let position = character.transform.position;
        let to_target = command.target_position - position;
        let flat = Vec3::new(to_target.x, 0.0, to_target.z);
        let distance = flat.length();

        if distance <= self.arrival_threshold {
            character.command = None;
            log::debug!("'{}' arrived", character.name);
            if let Err(err) = mixer.play(character, &self.idle_clip) {
                log::warn!("idle request on arrival failed: {err}");
            }
            return;
        }

        if let Err(err) = mixer.play(character, &self.gait_clip) {
            log::warn!("gait request failed: {err}");
        }

        // Translate, clamping at the target so the path never overshoots
        let step = self.speed * dt;
        if step >= distance {
            character.transform.position.x = command.target_position.x;
            character.transform.position.z = command.target_position.z;
        } else {
            let direction = flat / distance;
            character.transform.position += direction * step;
        }

        character.transform.rotation = rotate_towards(
            character.transform.rotation,
            command.target_orientation,
            self.turn_rate * dt,
        );
    }
}

impl Default for LocomotionController {
    fn default() -> Self {
        Self::new(
            DEFAULT_SPEED,
            DEFAULT_ARRIVAL_THRESHOLD,
            DEFAULT_TURN_RATE,
            "walking",
            "idle",
        )
    }
}

/// Rotates `from` toward `to` by at most `max_angle` radians, landing
/// exactly on `to` once within range.
#[must_use]
pub fn rotate_towards(from: Quat, to: Quat, max_angle: f32) -> Quat {
    let angle = from.angle_between(to);
    if angle <= max_angle || angle <= f32::EPSILON {
        to
    } else {
        from.slerp(to, max_angle / angle)
    }
}
