use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::animation::AnimationClip;
use crate::errors::{Error, Result};

/// Name-keyed store of immutable animation clips.
///
/// Clips are registered once, up front, by whatever loading layer the host
/// runs (the loaders themselves are outside this core; characters are only
/// constructed after loading has resolved). Lookups hand out cheap
/// `Arc` clones; the clip data itself is never mutated.
#[derive(Default)]
pub struct ClipRegistry {
    clips: FxHashMap<String, Arc<AnimationClip>>,
}

impl ClipRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a clip under its own name, returning the shared handle.
    /// Re-registering a name replaces the previous clip; characters built
    /// earlier keep their old handle.
    pub fn insert(&mut self, clip: AnimationClip) -> Arc<AnimationClip> {
        let clip = Arc::new(clip);
        if let Some(previous) = self.clips.insert(clip.name.clone(), Arc::clone(&clip)) {
            log::debug!("clip '{}' re-registered", previous.name);
        }
        clip
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<AnimationClip>> {
        self.clips.get(name).cloned()
    }

    /// Like [`Self::get`] but failing lookups become
    /// [`Error::AssetNotFound`].
    pub fn fetch(&self, name: &str) -> Result<Arc<AnimationClip>> {
        self.get(name)
            .ok_or_else(|| Error::AssetNotFound(name.to_string()))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.clips.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Iterates the registered clip names in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.clips.keys().map(String::as_str)
    }
}
