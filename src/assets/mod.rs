//! Asset storage.
//!
//! The viewer core owns exactly one asset kind: animation clips, keyed by
//! name. Model meshes, textures, and the machinery that decodes them belong
//! to the host's loading layer and never cross into this crate.

pub mod clips;

pub use clips::ClipRegistry;
