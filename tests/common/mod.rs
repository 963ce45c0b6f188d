//! Deterministic synthetic images shared by the integration tests.

#![allow(dead_code)]

use scenematch::PixelBuffer;

/// Integer hash with good bit mixing (murmur3 finalizer).
pub fn hash(x: usize, y: usize, salt: u32) -> u32 {
    let mut h = (x as u32).wrapping_mul(0x9E37_79B1)
        ^ (y as u32).wrapping_mul(0x85EB_CA77)
        ^ salt.wrapping_mul(0xC2B2_AE3D);
    h ^= h >> 16;
    h = h.wrapping_mul(0x85EB_CA6B);
    h ^= h >> 13;
    h = h.wrapping_mul(0xC2B2_AE35);
    h ^= h >> 16;
    h
}

/// Pseudo-random texture with every channel in `[70, 190)`.
pub fn textured(width: usize, height: usize) -> PixelBuffer {
    let mut buffer = PixelBuffer::filled(width, height, [0, 0, 0, 255]).unwrap();
    for y in 0..height {
        for x in 0..width {
            let channel = |salt| 70 + (hash(x, y, salt) % 120) as u8;
            buffer.put_pixel(x, y, [channel(0), channel(1), channel(2), 255]);
        }
    }
    buffer
}

/// Smooth gradient: neighbouring pixels differ by 3 per channel step.
pub fn gradient(width: usize, height: usize) -> PixelBuffer {
    let mut buffer = PixelBuffer::filled(width, height, [0, 0, 0, 255]).unwrap();
    for y in 0..height {
        for x in 0..width {
            buffer.put_pixel(x, y, [60 + 3 * x as u8, 60 + 3 * y as u8, 200, 255]);
        }
    }
    buffer
}

/// Adds `+amplitude` or `-amplitude` (hash-chosen) to every RGB channel.
pub fn with_noise(src: &PixelBuffer, amplitude: u8) -> PixelBuffer {
    let mut out = src.clone();
    for y in 0..src.height() {
        for x in 0..src.width() {
            let px = src.pixel(x, y).unwrap();
            let mut noisy = [0u8, 0, 0, px[3]];
            for c in 0..3 {
                noisy[c] = if hash(x, y, 10 + c as u32) & 1 == 0 {
                    px[c].saturating_add(amplitude)
                } else {
                    px[c].saturating_sub(amplitude)
                };
            }
            out.put_pixel(x, y, noisy);
        }
    }
    out
}

pub fn black(width: usize, height: usize) -> PixelBuffer {
    PixelBuffer::filled(width, height, [0, 0, 0, 255]).unwrap()
}
