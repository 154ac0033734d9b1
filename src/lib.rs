//! Animation blending and click-to-move locomotion core for a skinned 3D
//! character viewer.
//!
//! The crate owns the state a character viewer mutates every frame: the
//! clip playback state of each character and where it is heading. Rendering,
//! skinning, windowing, and asset decoding stay with external
//! collaborators. Hosts drive everything through [`Viewer::update`] from
//! their own frame loop and read the pose surface back out afterwards.

pub mod animation;
pub mod assets;
pub mod errors;
pub mod input;
pub mod locomotion;
pub mod scene;
pub mod utils;
pub mod viewer;

pub use animation::{
    AnimationAction, AnimationClip, AnimationEvent, AnimationMixer, LoopPolicy,
};
pub use assets::ClipRegistry;
pub use errors::{Error, Result};
pub use input::PointerButton;
pub use locomotion::{LocomotionController, LocomotionState, MoveCommand};
pub use scene::{ActionSample, AnimatedCharacter, Camera, CharacterKey, Light, Scene, Transform};
pub use utils::Timer;
pub use viewer::Viewer;
