//! Owned contiguous RGBA buffer.

use crate::image::{RgbaView, CHANNELS};
use crate::util::{SceneMatchError, SceneMatchResult};

/// Owned row-major RGBA image, 8 bits per channel, no row padding.
///
/// Invariant: `data.len() == width * height * 4` and both dimensions are
/// positive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl PixelBuffer {
    /// Wraps `data` as a `width x height` RGBA buffer.
    pub fn new(data: Vec<u8>, width: usize, height: usize) -> SceneMatchResult<Self> {
        let expected = sample_count(width, height)?;
        if data.len() != expected {
            return Err(SceneMatchError::BufferSizeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a buffer filled with a single RGBA color.
    pub fn filled(width: usize, height: usize, rgba: [u8; 4]) -> SceneMatchResult<Self> {
        let expected = sample_count(width, height)?;
        let data = rgba.iter().copied().cycle().take(expected).collect();
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Copies a (possibly strided) view into a contiguous buffer.
    pub fn from_view(view: RgbaView<'_>) -> SceneMatchResult<Self> {
        let width = view.width();
        let height = view.height();
        let mut data = Vec::with_capacity(sample_count(width, height)?);
        for y in 0..height {
            let row = view.row(y).ok_or(SceneMatchError::BufferTooSmall {
                needed: (y + 1) * view.stride() * CHANNELS,
                got: view.as_slice().len(),
            })?;
            data.extend_from_slice(row);
        }
        Self::new(data, width, height)
    }

    /// Returns a borrowed view of the buffer.
    pub fn view(&self) -> RgbaView<'_> {
        RgbaView {
            data: &self.data,
            width: self.width,
            height: self.height,
            stride: self.width,
        }
    }

    /// Returns the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the raw RGBA samples.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the `[r, g, b, a]` samples at `(x, y)` if within bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y * self.width + x) * CHANNELS;
        self.data.get(start..start + CHANNELS)
    }

    /// Overwrites the pixel at `(x, y)`; out-of-bounds writes are ignored.
    pub fn put_pixel(&mut self, x: usize, y: usize, rgba: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let start = (y * self.width + x) * CHANNELS;
        self.data[start..start + CHANNELS].copy_from_slice(&rgba);
    }

    /// Copies `src` into this buffer with its top-left corner at `(x0, y0)`,
    /// clipping whatever falls outside.
    pub fn paste(&mut self, src: RgbaView<'_>, x0: usize, y0: usize) {
        if x0 >= self.width || y0 >= self.height {
            return;
        }
        let cols = src.width().min(self.width - x0);
        let rows = src.height().min(self.height - y0);
        for y in 0..rows {
            let Some(src_row) = src.row(y) else {
                return;
            };
            let dst = ((y0 + y) * self.width + x0) * CHANNELS;
            self.data[dst..dst + cols * CHANNELS].copy_from_slice(&src_row[..cols * CHANNELS]);
        }
    }

    /// Consumes the buffer and returns the raw samples.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

fn sample_count(width: usize, height: usize) -> SceneMatchResult<usize> {
    if width == 0 || height == 0 {
        return Err(SceneMatchError::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .and_then(|v| v.checked_mul(CHANNELS))
        .ok_or(SceneMatchError::InvalidDimensions { width, height })
}
