//! Viewer Core Module
//!
//! This module contains [`Viewer`], the coordinator of the character viewer
//! core. It is a pure state instance without any window or GPU management,
//! driven by a host-owned loop that calls [`Viewer::update`] with the
//! frame's elapsed time. There is no hidden frame callback.
//!
//! # Architecture
//!
//! - **`Scene`**: explicit context object (characters, lights, camera,
//!   ground plane, viewport)
//! - **`ClipRegistry`**: immutable animation clip storage
//! - **`AnimationMixer`**: blend policy, one safe entry point for `play`
//! - **`LocomotionController`**: move-to-point steering
//!
//! # Frame order
//!
//! Input enters through [`Viewer::request_animation`] and the click
//! handlers at any point during a frame; it is queued, not applied.
//! `update(dt)` then runs locomotion, advances the mixer (consuming any
//! finish events in the same call), and only afterwards drains the queue.
//! A stale finish signal therefore can never undo a play request issued by
//! input in the same frame.
//!
//! # Example
//!
//! ```rust,ignore
//! use mannequin::Viewer;
//!
//! let mut viewer = Viewer::new();
//! viewer.clips_mut().insert(/* ... */);
//! let player = viewer.spawn_character("dummy", &["idle", "walking"])?;
//!
//! // Host-owned loop
//! loop {
//!     viewer.update(dt);
//!     // ... external renderer reads the pose surface ...
//! }
//! ```

use glam::{Vec2, Vec3};

use crate::animation::{AnimationEvents, AnimationMixer};
use crate::assets::ClipRegistry;
use crate::errors::Result;
use crate::input::{self, PointerButton};
use crate::locomotion::LocomotionController;
use crate::scene::{AnimatedCharacter, CharacterKey, Scene};

/// A queued input command, applied at the end of the next `update`.
#[derive(Debug, Clone)]
enum Command {
    Play(String),
    MoveTo(Vec3),
}

/// The coordinator owning scene state, clip storage, and both controllers.
pub struct Viewer {
    scene: Scene,
    clips: ClipRegistry,
    mixer: AnimationMixer,
    locomotion: LocomotionController,

    player: Option<CharacterKey>,
    commands: Vec<Command>,

    time: f32,
    frame_count: u64,
}

impl Viewer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            clips: ClipRegistry::new(),
            mixer: AnimationMixer::default(),
            locomotion: LocomotionController::default(),

            player: None,
            commands: Vec::new(),

            time: 0.0,
            frame_count: 0,
        }
    }

    /// Replaces the default blend policy (configuration stage).
    #[must_use]
    pub fn with_mixer(mut self, mixer: AnimationMixer) -> Self {
        self.mixer = mixer;
        self
    }

    /// Replaces the default steering policy (configuration stage).
    #[must_use]
    pub fn with_locomotion(mut self, locomotion: LocomotionController) -> Self {
        self.locomotion = locomotion;
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    #[must_use]
    pub fn clips(&self) -> &ClipRegistry {
        &self.clips
    }

    pub fn clips_mut(&mut self) -> &mut ClipRegistry {
        &mut self.clips
    }

    /// The character input commands are routed to, once spawned.
    #[must_use]
    pub fn player(&self) -> Option<&AnimatedCharacter> {
        self.player.and_then(|key| self.scene.character(key))
    }

    #[must_use]
    pub fn player_key(&self) -> Option<CharacterKey> {
        self.player
    }

    /// Total elapsed update time in seconds.
    #[inline]
    #[must_use]
    pub fn time(&self) -> f32 {
        self.time
    }

    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    // ========================================================================
    // Setup
    // ========================================================================

    /// Builds a character from the registry, adds it to the scene, and makes
    /// it the player if none exists yet.
    ///
    /// # Errors
    ///
    /// [`Error::AssetNotFound`](crate::errors::Error::AssetNotFound) if any
    /// clip name is unregistered; nothing is spawned in that case.
    pub fn spawn_character(
        &mut self,
        name: impl Into<String>,
        clip_names: &[&str],
    ) -> Result<CharacterKey> {
        let character = AnimatedCharacter::from_registry(name, &self.clips, clip_names)?;
        let key = self.scene.add_character(character);
        if self.player.is_none() {
            self.player = Some(key);
        }
        Ok(key)
    }

    /// Reports a new surface size to the scene camera.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.scene.resize(width, height);
    }

    // ========================================================================
    // Input surface
    // ========================================================================

    /// Queues an animation request for the player. Dropped silently if no
    /// character is ready when the queue drains; an unknown clip name is
    /// rejected (and logged) at drain time without changing the current
    /// animation.
    pub fn request_animation(&mut self, name: &str) {
        self.commands.push(Command::Play(name.to_string()));
    }

    /// Queues a walk order toward a pre-picked world point. Non-finite
    /// points are rejected here, at the input boundary; the controller
    /// itself accepts any finite target, in or out of view.
    pub fn on_ground_click(&mut self, world_point: Vec3) {
        if !world_point.is_finite() {
            log::warn!("ignoring non-finite ground click");
            return;
        }
        self.commands.push(Command::MoveTo(world_point));
    }

    /// Maps a raw pointer click to a ground command: primary and secondary
    /// buttons only, and only when the cursor ray actually hits the ground
    /// plane.
    pub fn handle_pointer_click(&mut self, button: PointerButton, cursor: Vec2) {
        if !button.registers_ground_click() {
            return;
        }
        if let Some(point) = input::pick_ground_point(
            &self.scene.camera,
            cursor,
            self.scene.viewport(),
            self.scene.ground_height,
        ) {
            self.on_ground_click(point);
        }
    }

    // ========================================================================
    // Per-frame update
    // ========================================================================

    /// Advances the whole core by `dt` seconds and returns the animation
    /// events the frame produced.
    pub fn update(&mut self, dt: f32) -> AnimationEvents {
        let mut events = AnimationEvents::new();

        if let Some(character) = self.player.and_then(|key| self.scene.character_mut(key)) {
            self.locomotion.tick(&self.mixer, character, dt);
            events = self.mixer.tick(character, dt);
        }

        self.drain_commands();
        self.scene.update_transforms();

        self.time += dt;
        self.frame_count += 1;
        events
    }

    fn drain_commands(&mut self) {
        if self.commands.is_empty() {
            return;
        }
        let commands = std::mem::take(&mut self.commands);

        let Some(character) = self.player.and_then(|key| self.scene.character_mut(key)) else {
            // No character is ready; input before the spawn is dropped
            return;
        };

        for command in commands {
            match command {
                Command::Play(name) => {
                    if let Err(err) = self.mixer.play(character, &name) {
                        log::warn!("animation request rejected: {err}");
                    }
                }
                Command::MoveTo(point) => {
                    self.locomotion.set_target(character, point);
                }
            }
        }
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}
