//! Single-slot template store with copy-on-replace semantics.
//!
//! The current template lives in an `Arc` behind a read/write lock. Readers
//! clone the `Arc` and drop the lock before scanning, so a concurrent load
//! never touches pixels an in-flight detection is reading. A failed load never
//! reaches the lock, leaving the previous template in place.

use crate::image::io::decode_rgba;
use crate::image::PixelBuffer;
use crate::template::Template;
use crate::trace::{trace_event, trace_span};
use crate::util::LoadError;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Holds the currently loaded template, if any.
#[derive(Debug, Default)]
pub struct TemplateStore {
    current: RwLock<Option<Arc<Template>>>,
    generation: AtomicU64,
}

impl TemplateStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once a template has been loaded successfully.
    pub fn is_template_loaded(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Returns a snapshot of the current template.
    pub fn current(&self) -> Option<Arc<Template>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Reads and decodes the image at `path`, then installs it.
    ///
    /// The file is read asynchronously and decoded on a blocking worker. When
    /// several loads overlap, the one that finishes last stays installed.
    pub async fn load_template(&self, path: impl AsRef<Path>) -> Result<Arc<Template>, LoadError> {
        let path = path.as_ref();
        let locator = path.display().to_string();
        // Entered spans must not live across an await.
        trace_event!("template_load_started", locator = locator.as_str());

        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(source) => {
                let err = LoadError::Io {
                    path: path.to_path_buf(),
                    source,
                };
                let reason = err.to_string();
                trace_event!("template_load_failed", reason = reason.as_str());
                return Err(err);
            }
        };

        let worker_locator = locator.clone();
        let decoded = tokio::task::spawn_blocking(move || decode_rgba(&bytes, &worker_locator))
            .await
            .map_err(|source| LoadError::Worker {
                locator: locator.clone(),
                source,
            })
            .and_then(|res| res);

        match decoded {
            Ok(pixels) => Ok(self.replace_template(locator, pixels)),
            Err(err) => {
                let reason = err.to_string();
                trace_event!("template_load_failed", reason = reason.as_str());
                Err(err)
            }
        }
    }

    /// Decodes in-memory image bytes and installs the result.
    pub fn load_template_bytes(
        &self,
        locator: impl Into<String>,
        bytes: &[u8],
    ) -> Result<Arc<Template>, LoadError> {
        let locator = locator.into();
        let _span = trace_span!("load_template", locator = locator.as_str()).entered();
        match decode_rgba(bytes, &locator) {
            Ok(pixels) => Ok(self.replace_template(locator, pixels)),
            Err(err) => {
                let reason = err.to_string();
                trace_event!("template_load_failed", reason = reason.as_str());
                Err(err)
            }
        }
    }

    /// Installs an already decoded buffer, replacing any previous template.
    pub fn replace_template(
        &self,
        locator: impl Into<String>,
        pixels: PixelBuffer,
    ) -> Arc<Template> {
        let mut slot = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
        let template = Arc::new(Template::new(pixels, locator.into(), generation));
        trace_event!(
            "template_loaded",
            width = template.width(),
            height = template.height(),
            generation = generation
        );
        *slot = Some(Arc::clone(&template));
        template
    }
}

#[cfg(test)]
mod tests {
    use super::TemplateStore;
    use crate::image::PixelBuffer;
    use std::sync::Arc;

    #[test]
    fn replacement_does_not_disturb_existing_snapshots() {
        let store = TemplateStore::new();
        assert!(store.current().is_none());

        let red = PixelBuffer::filled(2, 2, [255, 0, 0, 255]).unwrap();
        store.replace_template("red", red.clone());
        let snapshot = store.current().unwrap();

        let blue = PixelBuffer::filled(3, 3, [0, 0, 255, 255]).unwrap();
        let replaced = store.replace_template("blue", blue);

        assert_eq!(snapshot.pixels(), &red);
        assert_eq!(snapshot.locator(), "red");
        assert!(replaced.generation() > snapshot.generation());
        assert!(Arc::ptr_eq(&replaced, &store.current().unwrap()));
    }

    #[test]
    fn failed_bytes_load_keeps_previous_template() {
        let store = TemplateStore::new();
        let px = PixelBuffer::filled(2, 2, [1, 2, 3, 255]).unwrap();
        let first = store.replace_template("first", px);

        assert!(store.load_template_bytes("broken", b"\x89PNG garbage").is_err());
        assert!(store.is_template_loaded());
        assert!(Arc::ptr_eq(&first, &store.current().unwrap()));
    }
}
