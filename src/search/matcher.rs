//! High-level matcher bound to a template store.

use crate::image::RgbaView;
use crate::search::color::{ColorMatches, ColorTarget};
use crate::search::scan::detect_template;
use crate::search::{MatchConfig, MatchResult};
use crate::template::TemplateStore;
use crate::trace::trace_event;
use crate::util::{SceneMatchError, SceneMatchResult};
use std::sync::Arc;

/// Runs detections against whatever template the store currently holds.
///
/// Each `detect` call takes one snapshot of the template and reads only that
/// snapshot, so loads may proceed concurrently with detections.
#[derive(Clone, Debug)]
pub struct Matcher {
    store: Arc<TemplateStore>,
    cfg: MatchConfig,
}

impl Matcher {
    /// Creates a matcher with the default configuration.
    pub fn new(store: Arc<TemplateStore>) -> Self {
        Self {
            store,
            cfg: MatchConfig::default(),
        }
    }

    /// Replaces the matcher configuration.
    pub fn with_config(mut self, cfg: MatchConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    /// Returns the shared template store.
    pub fn store(&self) -> &Arc<TemplateStore> {
        &self.store
    }

    pub fn is_template_loaded(&self) -> bool {
        self.store.is_template_loaded()
    }

    /// Finds the loaded template in `scene`.
    ///
    /// Fails with [`SceneMatchError::NotLoaded`] before any successful load.
    /// A miss is `Ok` with `found == false`.
    pub fn detect(&self, scene: RgbaView<'_>, threshold: f64) -> SceneMatchResult<MatchResult> {
        let template = self.store.current().ok_or(SceneMatchError::NotLoaded)?;
        detect_template(template.view(), scene, threshold, &self.cfg)
    }

    /// Lazily yields every sampled scene pixel close to `target`.
    ///
    /// Needs no template.
    pub fn detect_by_color<'a>(
        &self,
        scene: RgbaView<'a>,
        target: ColorTarget,
    ) -> SceneMatchResult<ColorMatches<'a>> {
        self.cfg.validate()?;
        trace_event!(
            "color_scan",
            r = target.r,
            g = target.g,
            b = target.b,
            tolerance = target.tolerance,
            step = self.cfg.color_step
        );
        Ok(ColorMatches::new(scene, target, self.cfg.color_step))
    }
}
