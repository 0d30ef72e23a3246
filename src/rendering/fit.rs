//! Working-size fit: shrink a source to fit a bounding box.

use std::borrow::Cow;

use image::imageops::{self, FilterType};
use lofi_dither::RgbaImage;

use super::buffer::{from_image_buffer, to_image_buffer};
use crate::error::RenderError;

/// Dimensions of `width x height` scaled uniformly to fit inside
/// `max_width x max_height`. Never upscales; each side is at least 1.
pub fn fitted_size(width: usize, height: usize, max_width: usize, max_height: usize) -> (usize, usize) {
    if width == 0 || height == 0 {
        return (width, height);
    }
    let s = (max_width as f64 / width as f64)
        .min(max_height as f64 / height as f64)
        .min(1.0);
    let w = ((width as f64 * s).floor() as usize).max(1);
    let h = ((height as f64 * s).floor() as usize).max(1);
    (w, h)
}

/// Downscale `image` to fit a `max_size` square with a triangle filter.
///
/// Returns the input unchanged (borrowed) when it already fits.
pub fn fit_within(image: &RgbaImage, max_size: u32) -> Result<Cow<'_, RgbaImage>, RenderError> {
    let max = max_size.max(1) as usize;
    let (src_w, src_h) = (image.width(), image.height());
    let (w, h) = fitted_size(src_w, src_h, max, max);
    if (w, h) == (src_w, src_h) {
        return Ok(Cow::Borrowed(image));
    }

    tracing::debug!(src_w, src_h, w, h, "Fitting source to max size");
    let buffer = to_image_buffer(image)?;
    // w and h are no larger than the source, which fits u32
    let resized = imageops::resize(&buffer, w as u32, h as u32, FilterType::Triangle);
    Ok(Cow::Owned(from_image_buffer(resized)?))
}
