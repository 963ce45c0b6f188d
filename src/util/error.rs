//! Error types for scenematch.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for scenematch operations.
pub type SceneMatchResult<T> = std::result::Result<T, SceneMatchError>;

/// Errors that can occur when building buffers or running detections.
#[derive(Debug, Error)]
pub enum SceneMatchError {
    /// Width or height is zero, or the pixel count overflows.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// Row stride (in pixels) is smaller than the row width.
    #[error("invalid stride: width={width}, stride={stride}")]
    InvalidStride { width: usize, stride: usize },
    /// The backing slice is too short for the requested view.
    #[error("buffer too small: needed {needed} bytes, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// An owned buffer must hold exactly `width * height * 4` samples.
    #[error("buffer size mismatch: expected {expected} bytes, got {got}")]
    BufferSizeMismatch { expected: usize, got: usize },
    /// Detection threshold outside `[0, 1]`.
    #[error("threshold must lie in [0, 1], got {value}")]
    InvalidThreshold { value: f64 },
    /// A matcher configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// Detection was requested before any template was loaded.
    #[error("template not loaded")]
    NotLoaded,
    /// Loading the template resource failed.
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Failures while fetching or decoding a template resource.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading the resource failed.
    #[error("failed to read template {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The bytes could not be decoded as an image.
    #[error("failed to decode template {locator}: {source}")]
    Decode {
        locator: String,
        #[source]
        source: image::ImageError,
    },
    /// The blocking decode worker panicked or was cancelled.
    #[error("template decode worker failed for {locator}: {source}")]
    Worker {
        locator: String,
        #[source]
        source: tokio::task::JoinError,
    },
    /// The decoded image could not be turned into a pixel buffer.
    #[error("decoded template {locator} is unusable: {reason}")]
    Buffer { locator: String, reason: String },
}
