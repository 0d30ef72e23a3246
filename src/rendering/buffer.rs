//! Conversion between the pipeline's `RgbaImage` and `image` buffers.
//!
//! Resampling and blurring go through `image::imageops`; the pipeline
//! itself only sees its own type.

use lofi_dither::RgbaImage;

use crate::error::RenderError;

/// Copy `image` into an `image::RgbaImage`.
pub fn to_image_buffer(image: &RgbaImage) -> Result<image::RgbaImage, RenderError> {
    let too_large = || {
        RenderError::Buffer(format!(
            "{}x{} exceeds the u32 range",
            image.width(),
            image.height()
        ))
    };
    let width = u32::try_from(image.width()).map_err(|_| too_large())?;
    let height = u32::try_from(image.height()).map_err(|_| too_large())?;
    image::RgbaImage::from_raw(width, height, image.as_raw().to_vec()).ok_or_else(|| {
        RenderError::Buffer(format!("buffer too short for {width}x{height}"))
    })
}

/// Take ownership of an `image::RgbaImage`'s pixels.
pub fn from_image_buffer(buffer: image::RgbaImage) -> Result<RgbaImage, RenderError> {
    let (width, height) = buffer.dimensions();
    Ok(RgbaImage::new(
        width as usize,
        height as usize,
        buffer.into_raw(),
    )?)
}
