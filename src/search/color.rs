//! Color-proximity scan.
//!
//! Samples the scene on a coarse grid and accepts every pixel whose summed
//! RGB distance to the target is below `tolerance * 3`. No shape information
//! is used, which makes this much cheaper than template detection.

use crate::image::RgbaView;
use crate::search::{MatchResult, DEFAULT_COLOR_TOLERANCE};

/// Target color plus per-channel tolerance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorTarget {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Average per-channel distance still accepted; 0 accepts nothing.
    pub tolerance: u32,
}

impl ColorTarget {
    /// Creates a target with the default tolerance.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            tolerance: DEFAULT_COLOR_TOLERANCE,
        }
    }

    pub fn with_tolerance(mut self, tolerance: u32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns the confidence for `pixel`, or `None` when it is rejected.
    pub fn score(&self, pixel: &[u8]) -> Option<f32> {
        let [r, g, b, ..] = pixel else {
            return None;
        };
        let diff = u64::from(r.abs_diff(self.r))
            + u64::from(g.abs_diff(self.g))
            + u64::from(b.abs_diff(self.b));
        let limit = u64::from(self.tolerance) * 3;
        if diff < limit {
            Some((1.0 - diff as f64 / limit as f64) as f32)
        } else {
            None
        }
    }
}

/// Iterator over color hits in row-major sampling order.
///
/// Finite: every grid point is visited exactly once.
#[derive(Clone, Debug)]
pub struct ColorMatches<'a> {
    scene: RgbaView<'a>,
    target: ColorTarget,
    step: usize,
    x: usize,
    y: usize,
}

impl<'a> ColorMatches<'a> {
    pub(crate) fn new(scene: RgbaView<'a>, target: ColorTarget, step: usize) -> Self {
        Self {
            scene,
            target,
            step: step.max(1),
            x: 0,
            y: 0,
        }
    }

    /// Scans the full scene independently of any matcher.
    pub fn scan(scene: RgbaView<'a>, target: ColorTarget, step: usize) -> Self {
        Self::new(scene, target, step)
    }
}

impl Iterator for ColorMatches<'_> {
    type Item = MatchResult;

    fn next(&mut self) -> Option<MatchResult> {
        while self.y < self.scene.height() {
            let (x, y) = (self.x, self.y);
            self.x += self.step;
            if self.x >= self.scene.width() {
                self.x = 0;
                self.y += self.step;
            }

            let hit = self
                .scene
                .pixel(x, y)
                .and_then(|pixel| self.target.score(pixel));
            if let Some(confidence) = hit {
                return Some(MatchResult {
                    found: true,
                    x: x as f32,
                    y: y as f32,
                    confidence,
                });
            }
        }
        None
    }
}
