//! Decoding helpers backed by the `image` crate.

use crate::image::PixelBuffer;
use crate::util::LoadError;
use std::path::Path;

/// Converts a decoded RGBA image into a pixel buffer.
pub fn buffer_from_rgba_image(
    img: image::RgbaImage,
    locator: &str,
) -> Result<PixelBuffer, LoadError> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    PixelBuffer::new(img.into_raw(), width, height).map_err(|err| LoadError::Buffer {
        locator: locator.to_owned(),
        reason: err.to_string(),
    })
}

/// Decodes encoded image bytes (PNG or JPEG) into an RGBA buffer at the
/// image's natural size.
pub fn decode_rgba(bytes: &[u8], locator: &str) -> Result<PixelBuffer, LoadError> {
    let img = image::load_from_memory(bytes).map_err(|source| LoadError::Decode {
        locator: locator.to_owned(),
        source,
    })?;
    buffer_from_rgba_image(img.to_rgba8(), locator)
}

/// Reads and decodes an image file synchronously (e.g. a captured scene).
pub fn load_rgba_image<P: AsRef<Path>>(path: P) -> Result<PixelBuffer, LoadError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_rgba(&bytes, &path.display().to_string())
}
