//! Template and color search over captured scenes.
//!
//! [`Matcher`] ties a shared [`TemplateStore`](crate::TemplateStore) to a
//! [`MatchConfig`]. Template detection returns the single best placement;
//! the color scan yields every sampled pixel close to a target color.

mod color;
mod matcher;
pub(crate) mod scan;

use crate::kernel::ScanParams;
use crate::util::{SceneMatchError, SceneMatchResult};

pub use color::{ColorMatches, ColorTarget};
pub use matcher::Matcher;
pub use scan::detect_template;

/// Threshold used when callers have no better value.
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Default per-channel tolerance of the color scan.
pub const DEFAULT_COLOR_TOLERANCE: u32 = 30;

/// Outcome of a detection.
///
/// `x`/`y` are the center of the matched region for template detection and
/// the sampled pixel itself for color hits. When `found` is false the
/// location is `(0, 0)` and `confidence` still carries the best score seen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchResult {
    pub found: bool,
    pub x: f32,
    pub y: f32,
    /// Similarity in `[0, 1]`.
    pub confidence: f32,
}

impl MatchResult {
    /// A miss carrying the best confidence reached.
    pub fn not_found(confidence: f32) -> Self {
        Self {
            found: false,
            x: 0.0,
            y: 0.0,
            confidence,
        }
    }
}

/// Matcher configuration.
#[derive(Clone, Debug)]
pub struct MatchConfig {
    /// Step between candidate placements along both axes.
    pub scan_step: usize,
    /// Step between sampled template pixels along both axes.
    pub sample_step: usize,
    /// Stop scanning at the first placement scoring strictly above this.
    pub early_exit_score: Option<f64>,
    /// Step between sampled scene pixels for the color scan.
    pub color_step: usize,
    /// Scan candidate rows in parallel (requires the `rayon` feature).
    pub parallel: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            scan_step: 2,
            sample_step: 2,
            early_exit_score: Some(0.95),
            color_step: 5,
            parallel: false,
        }
    }
}

impl MatchConfig {
    /// Checks that every step is positive and the early-exit score is a
    /// valid confidence.
    pub fn validate(&self) -> SceneMatchResult<()> {
        if self.scan_step == 0 {
            return Err(SceneMatchError::InvalidConfig("scan_step must be at least 1"));
        }
        if self.sample_step == 0 {
            return Err(SceneMatchError::InvalidConfig(
                "sample_step must be at least 1",
            ));
        }
        if self.color_step == 0 {
            return Err(SceneMatchError::InvalidConfig("color_step must be at least 1"));
        }
        if let Some(limit) = self.early_exit_score {
            if !(0.0..=1.0).contains(&limit) {
                return Err(SceneMatchError::InvalidConfig(
                    "early_exit_score must lie in [0, 1]",
                ));
            }
        }
        Ok(())
    }

    pub(crate) fn scan_params(&self) -> ScanParams {
        ScanParams {
            scan_step: self.scan_step,
            sample_step: self.sample_step,
            early_exit_score: self.early_exit_score,
        }
    }
}
