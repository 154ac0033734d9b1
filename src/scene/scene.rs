use std::sync::atomic::{AtomicU32, Ordering};

use glam::{Vec2, Vec3, Vec4};
use slotmap::SlotMap;

use crate::scene::camera::Camera;
use crate::scene::character::AnimatedCharacter;
use crate::scene::light::Light;
use crate::scene::{CharacterKey, LightKey};

static NEXT_SCENE_ID: AtomicU32 = AtomicU32::new(1);

/// Default viewport before the host reports a size.
pub const DEFAULT_VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

/// Explicit scene context.
///
/// Scene is a pure data layer: characters, lights, the camera, and the
/// ground plane the click-to-move input tests against. There are no global
/// singletons and no hidden resize listeners: hosts construct as many
/// scenes as they like and report viewport changes through
/// [`Scene::resize`], which keeps instances independent and tests
/// deterministic.
pub struct Scene {
    pub id: u32,

    // ==== Component pools ====
    pub characters: SlotMap<CharacterKey, AnimatedCharacter>,
    pub lights: SlotMap<LightKey, Light>,

    pub camera: Camera,

    /// Solid background color (RGBA).
    pub background: Vec4,

    /// Height of the walkable ground plane.
    pub ground_height: f32,

    viewport: Vec2,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Creates a scene with the stock viewer rig: camera three units back at
    /// eye height aimed at the character's chest, a dim white ambient fill,
    /// one directional key light, and a steel-blue backdrop.
    #[must_use]
    pub fn new() -> Self {
        let mut camera = Camera::new_perspective(
            75.0,
            DEFAULT_VIEWPORT.x / DEFAULT_VIEWPORT.y,
            0.1,
            100.0,
        );
        camera.look_at_from(Vec3::new(0.0, 1.3, 3.0), Vec3::new(0.0, 1.3, 0.0));

        let mut lights = SlotMap::with_key();
        lights.insert(Light::new_ambient(Vec3::ONE, 0.3));
        lights.insert(Light::new_directional(
            Vec3::ONE,
            1.0,
            Vec3::new(0.0, -1.0, 0.0),
        ));

        Self {
            id: NEXT_SCENE_ID.fetch_add(1, Ordering::Relaxed),

            characters: SlotMap::with_key(),
            lights,

            camera,

            background: Vec4::new(0.086, 0.502, 0.686, 1.0),
            ground_height: 0.0,

            viewport: DEFAULT_VIEWPORT,
        }
    }

    /// Adds a character to the scene.
    pub fn add_character(&mut self, character: AnimatedCharacter) -> CharacterKey {
        self.characters.insert(character)
    }

    #[must_use]
    pub fn character(&self, key: CharacterKey) -> Option<&AnimatedCharacter> {
        self.characters.get(key)
    }

    pub fn character_mut(&mut self, key: CharacterKey) -> Option<&mut AnimatedCharacter> {
        self.characters.get_mut(key)
    }

    /// Current viewport size in physical pixels.
    #[inline]
    #[must_use]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Reports a new viewport size, updating the camera aspect.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.viewport = Vec2::new(width as f32, height as f32);
        self.camera.set_aspect(self.viewport.x / self.viewport.y);
    }

    /// Refreshes cached transform matrices after the frame's mutations, so
    /// an external renderer reads consistent state.
    pub fn update_transforms(&mut self) {
        for character in self.characters.values_mut() {
            character.transform.update_matrix();
        }
        self.camera.update_view_matrix();
    }
}
