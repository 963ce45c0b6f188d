//! SceneMatch locates a small reference image inside captured screen frames.
//!
//! A [`TemplateStore`] holds the single loaded template and swaps it
//! atomically on reload. A [`Matcher`] runs a strided normalized RGB
//! difference search for that template, or a cheaper color-proximity scan
//! that needs no template at all. Row-parallel scanning is available via the
//! `rayon` feature and structured logging via the `tracing` feature.

mod candidate;
pub mod image;
pub mod kernel;
pub mod lowlevel;
pub mod search;
pub mod template;
mod trace;
pub mod util;

pub use crate::image::io;
pub use crate::image::{PixelBuffer, RgbaView};
pub use search::{
    ColorMatches, ColorTarget, MatchConfig, MatchResult, Matcher, DEFAULT_COLOR_TOLERANCE,
    DEFAULT_THRESHOLD,
};
pub use template::{Template, TemplateStore};
pub use util::{LoadError, SceneMatchError, SceneMatchResult};
