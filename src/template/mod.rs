//! Template storage.
//!
//! A [`Template`] is an immutable RGBA image; the [`TemplateStore`] holds at
//! most one of them and swaps it wholesale on every successful load.

use crate::image::{PixelBuffer, RgbaView};

mod store;

pub use store::TemplateStore;

/// Immutable reference image searched for by the matcher.
#[derive(Debug)]
pub struct Template {
    pixels: PixelBuffer,
    locator: String,
    generation: u64,
}

impl Template {
    pub(crate) fn new(pixels: PixelBuffer, locator: String, generation: u64) -> Self {
        Self {
            pixels,
            locator,
            generation,
        }
    }

    /// Returns a borrowed view of the template pixels.
    pub fn view(&self) -> RgbaView<'_> {
        self.pixels.view()
    }

    /// Returns the owned pixel buffer.
    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    /// Template width in pixels.
    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    /// Template height in pixels.
    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    /// Path or label the template was loaded from.
    pub fn locator(&self) -> &str {
        &self.locator
    }

    /// Install counter; strictly increases with every template the store accepts.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
