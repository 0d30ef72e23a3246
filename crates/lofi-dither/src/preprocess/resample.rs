//! Point-sampling downscale with luminance extraction.

use crate::luma::LumaBuffer;
use crate::output::RgbaImage;

/// Working-grid dimensions for a `width x height` source at `scale`.
///
/// Each axis is `max(1, floor(n / scale))`; a scale of 0 counts as 1.
#[inline]
pub fn working_size(width: usize, height: usize, scale: u32) -> (usize, usize) {
    let s = scale.max(1) as usize;
    ((width / s).max(1), (height / s).max(1))
}

/// Rec. 601 luma, floored to a byte. Alpha is ignored.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let y = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
    y.floor().clamp(0.0, 255.0) as u8
}

/// Downscale `image` by `scale` and convert to luminance.
///
/// Cell `(x, y)` samples the single source pixel `(x * s, y * s)`; there is
/// no box averaging, which keeps the blocky look at large scales. The source
/// must be non-empty.
pub fn resample(image: &RgbaImage, scale: u32) -> LumaBuffer {
    let s = scale.max(1) as usize;
    let (w, h) = working_size(image.width(), image.height(), scale);
    let max_x = image.width().saturating_sub(1);
    let max_y = image.height().saturating_sub(1);

    let mut data = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            // Only reachable past the edge when the source is narrower than `s`.
            let [r, g, b, _] = image.pixel((x * s).min(max_x), (y * s).min(max_y));
            data.push(luminance(r, g, b));
        }
    }
    LumaBuffer::new(w, h, data)
}
