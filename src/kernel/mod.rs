//! Normalized RGB difference kernels.
//!
//! The score of a placement is the mean, over template pixels sampled every
//! `sample_step` pixels in both axes, of `1 - (|dR| + |dG| + |dB|) / 765`.
//! Alpha is ignored. Placements are visited every `scan_step` pixels in
//! row-major order.

use crate::candidate::Candidate;

pub mod scalar;

#[cfg(feature = "rayon")]
pub mod rayon;

/// Sum of the three channel differences for fully opposite pixels.
pub const MAX_PIXEL_DIFF: u32 = 255 * 3;

/// Scan configuration for kernel evaluations.
#[derive(Clone, Copy, Debug)]
pub struct ScanParams {
    /// Step between candidate placements, in pixels, along both axes.
    pub scan_step: usize,
    /// Step between sampled template pixels, in pixels, along both axes.
    pub sample_step: usize,
    /// Stop at the first placement scoring strictly above this value.
    pub early_exit_score: Option<f64>,
}

/// Result of a full template scan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScanOutcome {
    /// Highest-scoring placement, first in scan order on ties.
    pub best: Option<Candidate>,
    /// True when the scan stopped at an early-exit placement (`best`).
    pub early_exit: bool,
    /// Number of placements scored.
    pub positions: usize,
}

/// Per-row partial scan, reduced in row order by the full scans.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct RowScan {
    pub(crate) best: Option<Candidate>,
    pub(crate) exit: Option<Candidate>,
    pub(crate) positions: usize,
}
