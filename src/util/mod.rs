//! Shared utility helpers.

pub mod error;

pub use error::{LoadError, SceneMatchError, SceneMatchResult};
