//! Scene context module.
//!
//! Manages the explicit scene state the viewer core operates on:
//! - `AnimatedCharacter`: transform + animation repertoire + move command
//! - `Transform`: TRS component with matrix caching
//! - `Scene`: scene container (characters, lights, camera, ground plane)
//! - `Camera`: perspective camera component
//! - `Light`: light components matching the viewer's stock rig

pub mod camera;
pub mod character;
pub mod light;
pub mod scene;
pub mod transform;

pub use camera::Camera;
pub use character::{ActionSample, AnimatedCharacter};
pub use light::{Light, LightKind};
pub use scene::Scene;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct CharacterKey;
    pub struct LightKey;
}
