//! Scalar reference kernel for strided RGB difference scoring.

use crate::candidate::{BestCandidate, Candidate};
use crate::image::{RgbaView, CHANNELS};
use crate::kernel::{RowScan, ScanOutcome, ScanParams, MAX_PIXEL_DIFF};
use crate::trace::trace_debug;

/// Returns true when the template fits inside the scene in both axes.
pub fn template_fits(scene: RgbaView<'_>, tpl: RgbaView<'_>) -> bool {
    tpl.width() <= scene.width() && tpl.height() <= scene.height()
}

#[inline]
fn rgb_diff(a: &[u8], b: &[u8]) -> u32 {
    a.iter()
        .zip(b)
        .take(3)
        .map(|(&p, &q)| u32::from(p.abs_diff(q)))
        .sum()
}

/// Scores the template placed with its top-left corner at `(x, y)`.
///
/// Returns 0 for placements that do not fit inside the scene.
pub fn score_at(
    scene: RgbaView<'_>,
    tpl: RgbaView<'_>,
    x: usize,
    y: usize,
    sample_step: usize,
) -> f64 {
    let tpl_width = tpl.width();
    let tpl_height = tpl.height();
    let fits_x = x.checked_add(tpl_width).is_some_and(|end| end <= scene.width());
    let fits_y = y.checked_add(tpl_height).is_some_and(|end| end <= scene.height());
    if !fits_x || !fits_y {
        return 0.0;
    }

    let step = sample_step.max(1);
    let mut diff_sum = 0u64;
    let mut samples = 0u64;
    for ty in (0..tpl_height).step_by(step) {
        let (Some(tpl_row), Some(scene_row)) = (tpl.row(ty), scene.row(y + ty)) else {
            return 0.0;
        };
        let scene_row = &scene_row[x * CHANNELS..];
        for tx in (0..tpl_width).step_by(step) {
            let idx = tx * CHANNELS;
            diff_sum += u64::from(rgb_diff(&tpl_row[idx..idx + 3], &scene_row[idx..idx + 3]));
            samples += 1;
        }
    }

    if samples == 0 {
        return 0.0;
    }
    // Integer accumulation keeps the mean exact; identical pixels score 1.0.
    1.0 - diff_sum as f64 / (u64::from(MAX_PIXEL_DIFF) * samples) as f64
}

/// Scores every placement of row `y`, stopping at an early-exit hit.
pub(crate) fn scan_row(
    scene: RgbaView<'_>,
    tpl: RgbaView<'_>,
    y: usize,
    params: ScanParams,
) -> RowScan {
    let mut row = RowScan::default();
    let mut best = BestCandidate::default();
    let max_x = scene.width() - tpl.width();
    for x in (0..=max_x).step_by(params.scan_step.max(1)) {
        row.positions += 1;
        let candidate = Candidate {
            x,
            y,
            score: score_at(scene, tpl, x, y, params.sample_step),
        };
        best.offer(candidate);
        if params
            .early_exit_score
            .is_some_and(|limit| candidate.score > limit)
        {
            row.exit = Some(candidate);
            break;
        }
    }
    row.best = best.get();
    row
}

/// Folds row scans in row-major order.
///
/// Rows are consumed lazily, so a sequential caller stops computing rows once
/// one of them reports an early exit.
pub(crate) fn reduce_rows<I>(rows: I) -> ScanOutcome
where
    I: IntoIterator<Item = RowScan>,
{
    let mut best = BestCandidate::default();
    let mut positions = 0usize;
    for row in rows {
        positions += row.positions;
        if let Some(candidate) = row.best {
            if best.offer(candidate) {
                trace_debug!(
                    "best_updated",
                    x = candidate.x,
                    y = candidate.y,
                    score = candidate.score
                );
            }
        }
        if let Some(exit) = row.exit {
            return ScanOutcome {
                best: Some(exit),
                early_exit: true,
                positions,
            };
        }
    }
    ScanOutcome {
        best: best.get(),
        early_exit: false,
        positions,
    }
}

/// Scans every strided placement of the template over the scene.
pub fn scan_full(scene: RgbaView<'_>, tpl: RgbaView<'_>, params: ScanParams) -> ScanOutcome {
    if !template_fits(scene, tpl) {
        return ScanOutcome {
            best: None,
            early_exit: false,
            positions: 0,
        };
    }
    let max_y = scene.height() - tpl.height();
    reduce_rows(
        (0..=max_y)
            .step_by(params.scan_step.max(1))
            .map(|y| scan_row(scene, tpl, y, params)),
    )
}

#[cfg(test)]
mod tests {
    use super::{scan_full, score_at};
    use crate::image::PixelBuffer;
    use crate::kernel::ScanParams;

    const PARAMS: ScanParams = ScanParams {
        scan_step: 2,
        sample_step: 2,
        early_exit_score: Some(0.95),
    };

    #[test]
    fn identical_pixels_score_one_and_ignore_alpha() {
        let tpl = PixelBuffer::filled(3, 3, [40, 80, 120, 255]).unwrap();
        let scene = PixelBuffer::filled(3, 3, [40, 80, 120, 0]).unwrap();
        assert_eq!(score_at(scene.view(), tpl.view(), 0, 0, 2), 1.0);
    }

    #[test]
    fn opposite_pixels_score_zero() {
        let tpl = PixelBuffer::filled(2, 2, [255, 255, 255, 255]).unwrap();
        let scene = PixelBuffer::filled(2, 2, [0, 0, 0, 255]).unwrap();
        assert_eq!(score_at(scene.view(), tpl.view(), 0, 0, 1), 0.0);
    }

    #[test]
    fn only_stride_grid_pixels_are_sampled() {
        let tpl = PixelBuffer::filled(2, 2, [0, 0, 0, 255]).unwrap();
        let mut scene = PixelBuffer::filled(2, 2, [0, 0, 0, 255]).unwrap();
        // Off-grid pixels with stride 2 never contribute.
        scene.put_pixel(1, 0, [255, 255, 255, 255]);
        scene.put_pixel(1, 1, [255, 255, 255, 255]);
        assert_eq!(score_at(scene.view(), tpl.view(), 0, 0, 2), 1.0);
        assert_eq!(score_at(scene.view(), tpl.view(), 0, 0, 1), 0.5);
    }

    #[test]
    fn half_channel_difference_scores_half() {
        let tpl = PixelBuffer::filled(1, 1, [255, 0, 0, 255]).unwrap();
        let scene = PixelBuffer::filled(1, 1, [255, 255, 0, 255]).unwrap();
        let score = score_at(scene.view(), tpl.view(), 0, 0, 1);
        assert!((score - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn placement_outside_scene_scores_zero() {
        let tpl = PixelBuffer::filled(2, 2, [0, 0, 0, 255]).unwrap();
        let scene = PixelBuffer::filled(3, 3, [0, 0, 0, 255]).unwrap();
        assert_eq!(score_at(scene.view(), tpl.view(), 2, 0, 1), 0.0);
        assert_eq!(score_at(scene.view(), tpl.view(), usize::MAX, 0, 1), 0.0);
    }

    #[test]
    fn scan_counts_strided_positions() {
        let tpl = PixelBuffer::filled(2, 2, [0, 0, 0, 255]).unwrap();
        let scene = PixelBuffer::filled(7, 5, [255, 255, 255, 255]).unwrap();
        let outcome = scan_full(scene.view(), tpl.view(), PARAMS);
        // x in {0, 2, 4}, y in {0, 2}.
        assert_eq!(outcome.positions, 6);
        assert!(!outcome.early_exit);
        assert!(outcome.best.is_none());
    }

    /// Black square whose sampled pixels carry a total RGB difference of
    /// `diff` against a black template, spread in sampling order.
    fn black_with_sampled_diff(side: usize, diff: u32) -> PixelBuffer {
        let mut buffer = PixelBuffer::filled(side, side, [0, 0, 0, 255]).unwrap();
        let mut remaining = diff;
        for y in (0..side).step_by(2) {
            for x in (0..side).step_by(2) {
                if remaining == 0 {
                    return buffer;
                }
                let step = remaining.min(765);
                let channel = |share: u32| (step / 3 + u32::from(step % 3 > share)) as u8;
                buffer.put_pixel(x, y, [channel(0), channel(1), channel(2), 255]);
                remaining -= step;
            }
        }
        buffer
    }

    #[test]
    fn score_just_above_limit_triggers_early_exit() {
        // 137 x 137 samples; the 0.95 limit sits at a total diff of 717914.25.
        let tpl = PixelBuffer::filled(273, 273, [0, 0, 0, 255]).unwrap();
        let scene = black_with_sampled_diff(273, 717_914);
        let score = score_at(scene.view(), tpl.view(), 0, 0, 2);
        assert!(score > 0.95, "score = {score}");
        assert!(score < 0.950_000_1);

        let outcome = scan_full(scene.view(), tpl.view(), PARAMS);
        assert!(outcome.early_exit);

        let below = black_with_sampled_diff(273, 717_915);
        assert!(score_at(below.view(), tpl.view(), 0, 0, 2) < 0.95);
        assert!(!scan_full(below.view(), tpl.view(), PARAMS).early_exit);
    }

    #[test]
    fn scan_stops_at_first_placement_above_limit() {
        let tpl = PixelBuffer::filled(2, 2, [10, 10, 10, 255]).unwrap();
        let scene = PixelBuffer::filled(8, 8, [10, 10, 10, 255]).unwrap();
        let outcome = scan_full(scene.view(), tpl.view(), PARAMS);
        assert!(outcome.early_exit);
        assert_eq!(outcome.positions, 1);
        let best = outcome.best.unwrap();
        assert_eq!((best.x, best.y), (0, 0));
    }
}
