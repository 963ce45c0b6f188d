//! RGBA pixel buffers and views.
//!
//! `RgbaView` is a borrowed 2D view into a 1D sample buffer with an explicit
//! stride. The stride counts pixels between the starts of consecutive rows, so
//! a stride larger than the width represents padded rows (as produced by many
//! capture surfaces). Each pixel occupies four samples in R, G, B, A order.

use crate::util::{SceneMatchError, SceneMatchResult};

mod buffer;
pub mod io;

pub use buffer::PixelBuffer;

/// Number of samples per pixel.
pub const CHANNELS: usize = 4;

/// Borrowed RGBA image view with an explicit stride in pixels.
#[derive(Copy, Clone, Debug)]
pub struct RgbaView<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> RgbaView<'a> {
    /// Creates a contiguous view with `stride == width`.
    pub fn from_slice(data: &'a [u8], width: usize, height: usize) -> SceneMatchResult<Self> {
        Self::new(data, width, height, width)
    }

    /// Creates a view with an explicit stride (in pixels).
    pub fn new(
        data: &'a [u8],
        width: usize,
        height: usize,
        stride: usize,
    ) -> SceneMatchResult<Self> {
        let needed = required_len(width, height, stride)?;
        if data.len() < needed {
            return Err(SceneMatchError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the stride in pixels between row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the backing slice including any row padding.
    pub fn as_slice(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the `[r, g, b, a]` samples at `(x, y)` if within bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&'a [u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = y
            .checked_mul(self.stride)?
            .checked_add(x)?
            .checked_mul(CHANNELS)?;
        self.data.get(start..start + CHANNELS)
    }

    /// Returns the samples of row `y` (`width * 4` bytes, padding excluded).
    pub fn row(&self, y: usize) -> Option<&'a [u8]> {
        if y >= self.height {
            return None;
        }
        let start = y.checked_mul(self.stride)?.checked_mul(CHANNELS)?;
        let end = start.checked_add(self.width * CHANNELS)?;
        self.data.get(start..end)
    }
}

fn required_len(width: usize, height: usize, stride: usize) -> SceneMatchResult<usize> {
    if width == 0 || height == 0 {
        return Err(SceneMatchError::InvalidDimensions { width, height });
    }
    if stride < width {
        return Err(SceneMatchError::InvalidStride { width, stride });
    }
    (height - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(width))
        .and_then(|v| v.checked_mul(CHANNELS))
        .ok_or(SceneMatchError::InvalidDimensions { width, height })
}
