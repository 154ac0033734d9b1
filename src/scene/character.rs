use rustc_hash::FxHashMap;

use crate::animation::AnimationAction;
use crate::animation::mixer::CrossFade;
use crate::assets::ClipRegistry;
use crate::errors::Result;
use crate::locomotion::MoveCommand;
use crate::scene::transform::Transform;

/// One playable animation sample an external skinning evaluator consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionSample<'a> {
    pub clip: &'a str,
    pub time: f32,
    pub weight: f32,
}

/// A skinned character with a transform and a repertoire of playable clips.
///
/// # Design Principles
///
/// - The character is pure state: the [`AnimationMixer`] owns the blend
///   policy and the [`LocomotionController`] owns the steering policy; both
///   mutate the character they are handed each frame.
/// - Everything the renderer needs is read-only: the transform matrix and
///   the `(clip, time, weight)` samples of the active actions.
/// - At most one move command exists per character; issuing a new one
///   overwrites the previous (last-write-wins, no queueing).
///
/// [`AnimationMixer`]: crate::animation::AnimationMixer
/// [`LocomotionController`]: crate::locomotion::LocomotionController
#[derive(Debug, Clone)]
pub struct AnimatedCharacter {
    pub name: String,
    pub transform: Transform,

    // === Animation state (driven by the mixer) ===
    pub(crate) actions: FxHashMap<String, AnimationAction>,
    pub(crate) current: Option<String>,
    pub(crate) fade: Option<CrossFade>,

    // === Locomotion state (driven by the controller) ===
    pub(crate) command: Option<MoveCommand>,
}

impl AnimatedCharacter {
    /// Builds a character whose repertoire is `clip_names`, resolved against
    /// the registry.
    ///
    /// # Errors
    ///
    /// [`Error::AssetNotFound`](crate::errors::Error::AssetNotFound) if any
    /// name is missing from the registry. Controllers only ever see
    /// characters that were constructed successfully, so asset failures
    /// never reach the animation state machine.
    pub fn from_registry(
        name: impl Into<String>,
        registry: &ClipRegistry,
        clip_names: &[&str],
    ) -> Result<Self> {
        let mut actions = FxHashMap::default();
        for clip_name in clip_names {
            let clip = registry.fetch(clip_name)?;
            actions.insert((*clip_name).to_string(), AnimationAction::new(clip));
        }

        Ok(Self {
            name: name.into(),
            transform: Transform::new(),
            actions,
            current: None,
            fade: None,
            command: None,
        })
    }

    // ========================================================================
    // Animation queries
    // ========================================================================

    #[must_use]
    pub fn has_action(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    /// The name of the animation the character is currently playing, absent
    /// before the first `play`.
    #[must_use]
    pub fn current_action_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    #[must_use]
    pub fn action(&self, name: &str) -> Option<&AnimationAction> {
        self.actions.get(name)
    }

    /// Read-only pose surface: every action currently contributing to the
    /// blended pose, as `(clip, time, weight)` samples.
    pub fn active_actions(&self) -> impl Iterator<Item = ActionSample<'_>> {
        self.actions
            .values()
            .filter(|action| action.enabled && action.weight > 0.0)
            .map(|action| ActionSample {
                clip: action.clip_name(),
                time: action.time,
                weight: action.weight,
            })
    }

    // ========================================================================
    // Locomotion queries
    // ========================================================================

    /// The outstanding move command, if the character is underway.
    #[must_use]
    pub fn move_command(&self) -> Option<&MoveCommand> {
        self.command.as_ref()
    }
}
