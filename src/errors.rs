//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`Error`] covers the failure modes the animation and
//! locomotion core can report:
//! - Animation requests naming a clip outside a character's repertoire
//! - Clip registry lookups that fail by name
//!
//! Both are non-fatal by design: a rejected request leaves the character's
//! state unchanged, and registry failures are confined to character
//! construction and never reach the per-frame state machine.
//!
//! # Usage
//!
//! All fallible public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, Error>`.

use thiserror::Error as ThisError;

/// The main error type for the mannequin core.
#[derive(ThisError, Debug)]
pub enum Error {
    // ========================================================================
    // Animation Errors
    // ========================================================================
    /// An animation request named a clip absent from the character's
    /// repertoire. The current animation is left unchanged; there is no
    /// silent fallback, so caller bugs stay visible.
    #[error("Unknown animation: {0}")]
    UnknownAnimation(String),

    // ========================================================================
    // Asset Errors
    // ========================================================================
    /// A clip registry lookup failed by name. Raised only while a character
    /// is being constructed from its clip list.
    #[error("Asset not found: {0}")]
    AssetNotFound(String),
}

/// Alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
