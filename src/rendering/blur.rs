//! Pre-blur of the source frame.
//!
//! A gaussian blur whose standard deviation is the blur radius in source
//! pixels. The pipeline ignores alpha, so it is blurred along with RGB.

use image::imageops;
use lofi_dither::RgbaImage;

use super::buffer::{from_image_buffer, to_image_buffer};
use crate::error::RenderError;

/// Largest radius accepted; larger values are clamped.
pub const MAX_BLUR_RADIUS: u32 = 20;

/// Blur `image` with a gaussian of sigma `radius`.
///
/// `radius == 0` returns an unchanged copy.
pub fn gaussian_blur(image: &RgbaImage, radius: u32) -> Result<RgbaImage, RenderError> {
    let radius = radius.min(MAX_BLUR_RADIUS);
    if radius == 0 || image.is_empty() {
        return Ok(image.clone());
    }

    let buffer = to_image_buffer(image)?;
    let blurred = imageops::blur(&buffer, radius as f32);
    tracing::debug!(
        width = image.width(),
        height = image.height(),
        radius,
        "Applied pre-blur"
    );
    from_image_buffer(blurred)
}
