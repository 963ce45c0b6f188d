//! Rayon-parallel template scan (feature-gated).
//!
//! Candidate rows are scored in parallel and folded in row-major order, so the
//! outcome is identical to [`scan_full`](crate::kernel::scalar::scan_full),
//! including which placement triggers an early exit. Rows after an early-exit
//! row are still scored; only the fold discards them.

use crate::image::RgbaView;
use crate::kernel::scalar::{reduce_rows, scan_row, template_fits};
use crate::kernel::{RowScan, ScanOutcome, ScanParams};
use rayon::prelude::*;

/// Row-parallel full scan.
pub fn scan_full_par(scene: RgbaView<'_>, tpl: RgbaView<'_>, params: ScanParams) -> ScanOutcome {
    if !template_fits(scene, tpl) {
        return ScanOutcome {
            best: None,
            early_exit: false,
            positions: 0,
        };
    }

    let max_y = scene.height() - tpl.height();
    let rows: Vec<usize> = (0..=max_y).step_by(params.scan_step.max(1)).collect();
    let scans: Vec<RowScan> = rows
        .into_par_iter()
        .map(|y| scan_row(scene, tpl, y, params))
        .collect();
    reduce_rows(scans)
}
