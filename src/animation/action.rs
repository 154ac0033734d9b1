use std::sync::Arc;

use crate::animation::clip::{AnimationClip, LoopPolicy};

/// A character-bound, stateful instance of playing one clip.
///
/// Actions carry the time cursor and blend weight for a single clip on a
/// single character. The mixer drives them; the renderer reads them back
/// through [`AnimatedCharacter::active_actions`].
///
/// [`AnimatedCharacter::active_actions`]: crate::scene::AnimatedCharacter::active_actions
#[derive(Debug, Clone)]
pub struct AnimationAction {
    clip: Arc<AnimationClip>,

    /// Local time cursor in seconds, within `[0, clip.duration]`.
    pub time: f32,
    /// Playback rate multiplier applied to `dt`.
    pub time_scale: f32,
    /// Blend contribution in `[0, 1]`.
    pub weight: f32,
    /// Disabled actions neither advance nor contribute to the pose.
    pub enabled: bool,

    // Latched once a play-once clip clamps at its end, so the finish signal
    // fires exactly once per play while the action keeps holding the last
    // frame.
    finished: bool,
}

impl AnimationAction {
    #[must_use]
    pub fn new(clip: Arc<AnimationClip>) -> Self {
        Self {
            clip,
            time: 0.0,
            time_scale: 1.0,
            weight: 0.0,
            enabled: false,
            finished: false,
        }
    }

    #[must_use]
    pub fn clip(&self) -> &Arc<AnimationClip> {
        &self.clip
    }

    #[must_use]
    pub fn clip_name(&self) -> &str {
        &self.clip.name
    }

    /// Rewinds the time cursor for a fresh play. Weight is left to the
    /// caller: a cross-fade ramps it from wherever it currently sits.
    pub fn rewind(&mut self) {
        self.time = 0.0;
        self.finished = false;
    }

    /// Drops the action out of the active set entirely.
    pub fn deactivate(&mut self) {
        self.enabled = false;
        self.weight = 0.0;
    }

    /// Core logic: advance the time cursor.
    ///
    /// Returns `true` exactly when a [`LoopPolicy::Once`] clip reaches its
    /// end during this call. Loop-forever clips wrap and never report a
    /// finish.
    pub fn advance(&mut self, dt: f32) -> bool {
        if !self.enabled {
            return false;
        }

        let duration = self.clip.duration;
        if duration <= 0.0 {
            return false;
        }

        self.time += dt * self.time_scale;

        match self.clip.loop_policy {
            LoopPolicy::Loop => {
                if self.time >= duration {
                    self.time %= duration;
                } else if self.time < 0.0 {
                    // Reverse playback wraps from the end
                    self.time = duration + (self.time % duration);
                }
                false
            }
            LoopPolicy::Once => {
                if self.time >= duration {
                    self.time = duration;
                    if self.finished {
                        false
                    } else {
                        self.finished = true;
                        true
                    }
                } else {
                    if self.time < 0.0 {
                        self.time = 0.0;
                    }
                    false
                }
            }
        }
    }
}
