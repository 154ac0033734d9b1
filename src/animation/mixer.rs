use smallvec::SmallVec;

use crate::animation::clip::LoopPolicy;
use crate::errors::{Error, Result};
use crate::scene::AnimatedCharacter;

/// Default cross-fade length in seconds.
pub const DEFAULT_BLEND_DURATION: f32 = 0.25;

/// Events produced while advancing a character's actions.
///
/// The mixer consumes these itself inside the same [`AnimationMixer::tick`]
/// call (a finished current action reverts to idle); they are also returned
/// so hosts and tests can observe what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationEvent {
    /// A play-once clip reached its end this tick. Fired once per play.
    Finished { clip: String },
}

/// Per-tick event list. Two slots cover the realistic worst case of one
/// gesture finishing while another fades out.
pub type AnimationEvents = SmallVec<[AnimationEvent; 2]>;

/// In-flight cross-fade between two actions of one character.
///
/// Ramps are linear in time from the weights captured at fade start, which
/// is exactly 1→0 / 0→1 when the fade was not interrupted, and avoids a
/// weight pop when a new request supersedes a running fade.
#[derive(Debug, Clone)]
pub(crate) struct CrossFade {
    pub from: String,
    pub to: String,
    pub from_start_weight: f32,
    pub to_start_weight: f32,
    pub elapsed: f32,
    pub duration: f32,
}

/// Blend policy for one character's actions.
///
/// The mixer is the single safe entry point for changing what a character
/// plays. It holds only configuration; the mutable blend state (actions,
/// current action, in-flight fade) lives on the [`AnimatedCharacter`] it is
/// handed each call, so one mixer can drive any number of characters with
/// the same policy.
pub struct AnimationMixer {
    blend_duration: f32,
    idle_clip: String,
}

impl AnimationMixer {
    #[must_use]
    pub fn new(blend_duration: f32, idle_clip: impl Into<String>) -> Self {
        Self {
            blend_duration,
            idle_clip: idle_clip.into(),
        }
    }

    #[must_use]
    pub fn blend_duration(&self) -> f32 {
        self.blend_duration
    }

    /// The clip a finished gesture reverts to.
    #[must_use]
    pub fn idle_clip(&self) -> &str {
        &self.idle_clip
    }

    /// Requests that `name` become the character's playing animation.
    ///
    /// - An unknown name is rejected with [`Error::UnknownAnimation`] and the
    ///   character is left untouched.
    /// - Re-requesting the current animation is a no-op, so a steering loop
    ///   may call this every frame without restarting the clip.
    /// - The first play ever starts at full weight; later plays cross-fade
    ///   over the configured blend duration, with the incoming clip rewound
    ///   to its first frame.
    pub fn play(&self, character: &mut AnimatedCharacter, name: &str) -> Result<()> {
        if !character.has_action(name) {
            log::warn!(
                "animation '{name}' is not in the repertoire of '{}'",
                character.name
            );
            return Err(Error::UnknownAnimation(name.to_string()));
        }

        if character.current_action_name() == Some(name) {
            return Ok(());
        }

        // A superseded fade drops its outgoing action immediately; at most
        // two actions ever carry weight.
        if let Some(old) = character.fade.take() {
            if old.from != name {
                if let Some(action) = character.actions.get_mut(&old.from) {
                    action.deactivate();
                }
            }
        }

        match character.current.clone() {
            None => {
                if let Some(action) = character.actions.get_mut(name) {
                    action.rewind();
                    action.enabled = true;
                    action.weight = 1.0;
                }
            }
            Some(outgoing) => {
                let from_start_weight = character
                    .actions
                    .get(&outgoing)
                    .map_or(0.0, |a| a.weight);

                if let Some(incoming) = character.actions.get_mut(name) {
                    incoming.rewind();
                    incoming.enabled = true;
                    let to_start_weight = incoming.weight;

                    character.fade = Some(CrossFade {
                        from: outgoing,
                        to: name.to_string(),
                        from_start_weight,
                        to_start_weight,
                        elapsed: 0.0,
                        duration: self.blend_duration,
                    });
                }
            }
        }

        log::debug!("'{}' now playing '{name}'", character.name);
        character.current = Some(name.to_string());
        Ok(())
    }

    /// Advances blend weights and clip time by `dt` seconds.
    ///
    /// Finish events raised by play-once clips are handled before this call
    /// returns: if the finished clip is still the character's current action
    /// it reverts to the idle clip. A finish signal from an action that a
    /// newer `play` request superseded is ignored, so a stale signal can
    /// never undo the newer animation.
    pub fn tick(&self, character: &mut AnimatedCharacter, dt: f32) -> AnimationEvents {
        self.advance_fade(character, dt);

        let mut events = AnimationEvents::new();
        for action in character.actions.values_mut() {
            if action.advance(dt) {
                debug_assert_eq!(action.clip().loop_policy, LoopPolicy::Once);
                events.push(AnimationEvent::Finished {
                    clip: action.clip_name().to_string(),
                });
            }
        }

        for event in &events {
            let AnimationEvent::Finished { clip } = event;
            // Stale-finish guard: only the action that is still current may
            // pull the character back to idle.
            if character.current_action_name() == Some(clip.as_str()) {
                if let Err(err) = self.play(character, &self.idle_clip) {
                    log::warn!("revert to idle failed: {err}");
                }
            }
        }

        events
    }

    fn advance_fade(&self, character: &mut AnimatedCharacter, dt: f32) {
        let Some(fade) = &mut character.fade else {
            return;
        };

        fade.elapsed += dt;
        let t = if fade.duration > 0.0 {
            (fade.elapsed / fade.duration).min(1.0)
        } else {
            1.0
        };

        let from = fade.from.clone();
        let to = fade.to.clone();
        let from_weight = fade.from_start_weight * (1.0 - t);
        let to_weight = fade.to_start_weight + (1.0 - fade.to_start_weight) * t;
        let done = t >= 1.0;
        if done {
            character.fade = None;
        }

        if let Some(action) = character.actions.get_mut(&from) {
            if done {
                action.deactivate();
            } else {
                action.weight = from_weight;
            }
        }
        if let Some(action) = character.actions.get_mut(&to) {
            action.weight = if done { 1.0 } else { to_weight };
        }
    }
}

impl Default for AnimationMixer {
    fn default() -> Self {
        Self::new(DEFAULT_BLEND_DURATION, "idle")
    }
}
