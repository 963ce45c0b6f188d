//! Strided template detection over a single scene.

use crate::image::RgbaView;
use crate::kernel::scalar::{scan_full, template_fits};
use crate::kernel::ScanOutcome;
use crate::search::{MatchConfig, MatchResult};
use crate::trace::{trace_event, trace_span};
use crate::util::{SceneMatchError, SceneMatchResult};

/// Searches `scene` for `tpl` and reports the best placement.
///
/// A template larger than the scene in either axis is a normal miss with
/// zero confidence. A placement scoring above `cfg.early_exit_score` ends the
/// scan and is reported as found whatever the threshold; otherwise the best
/// placement is found when its score reaches `threshold`.
pub fn detect_template(
    tpl: RgbaView<'_>,
    scene: RgbaView<'_>,
    threshold: f64,
    cfg: &MatchConfig,
) -> SceneMatchResult<MatchResult> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(SceneMatchError::InvalidThreshold { value: threshold });
    }
    cfg.validate()?;

    let _span = trace_span!(
        "detect",
        scene_width = scene.width(),
        scene_height = scene.height(),
        template_width = tpl.width(),
        template_height = tpl.height(),
        threshold = threshold
    )
    .entered();

    if !template_fits(scene, tpl) {
        trace_event!(
            "template_larger_than_scene",
            template_width = tpl.width(),
            template_height = tpl.height()
        );
        return Ok(MatchResult::not_found(0.0));
    }

    let outcome = run_scan(scene, tpl, cfg);
    let best_score = outcome.best.map_or(0.0, |best| best.score);
    trace_event!(
        "scan_finished",
        positions = outcome.positions,
        early_exit = outcome.early_exit,
        best_score = best_score
    );

    let result = match outcome.best {
        Some(best) if outcome.early_exit || best.score >= threshold => MatchResult {
            found: true,
            x: best.x as f32 + tpl.width() as f32 / 2.0,
            y: best.y as f32 + tpl.height() as f32 / 2.0,
            confidence: best.score as f32,
        },
        Some(best) => MatchResult::not_found(best.score as f32),
        // Every placement scored zero; only a zero threshold accepts that.
        None => MatchResult {
            found: threshold <= 0.0,
            ..MatchResult::not_found(0.0)
        },
    };
    Ok(result)
}

fn run_scan(scene: RgbaView<'_>, tpl: RgbaView<'_>, cfg: &MatchConfig) -> ScanOutcome {
    let params = cfg.scan_params();
    #[cfg(feature = "rayon")]
    {
        if cfg.parallel {
            return crate::kernel::rayon::scan_full_par(scene, tpl, params);
        }
    }
    scan_full(scene, tpl, params)
}
