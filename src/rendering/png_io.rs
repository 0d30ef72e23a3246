//! PNG import and export.
//!
//! Decoding accepts every PNG colour type and bit depth and normalizes to
//! RGBA8. Encoding writes RGBA8 with fast settings, then re-compresses with
//! oxipng.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use lofi_dither::RgbaImage;

use crate::error::RenderError;

/// Decode PNG bytes into an RGBA8 image.
///
/// Palettes are expanded (honouring tRNS), 16-bit samples are stripped to
/// 8 bits, and grey is widened to RGB.
pub fn decode_png(bytes: &[u8]) -> Result<RgbaImage, RenderError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| RenderError::Decode(e.to_string()))?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| RenderError::Decode(e.to_string()))?;
    buf.truncate(info.buffer_size());

    if info.bit_depth != png::BitDepth::Eight {
        return Err(RenderError::UnsupportedFormat(format!(
            "{:?} at {:?} bits after expansion",
            info.color_type, info.bit_depth
        )));
    }

    let (width, height) = (info.width as usize, info.height as usize);
    let pixels = width * height;
    let mut rgba = Vec::with_capacity(pixels * 4);
    match info.color_type {
        png::ColorType::Rgba => rgba = buf,
        png::ColorType::Rgb => {
            for px in buf.chunks_exact(3) {
                rgba.extend_from_slice(&[px[0], px[1], px[2], 255]);
            }
        }
        png::ColorType::GrayscaleAlpha => {
            for px in buf.chunks_exact(2) {
                rgba.extend_from_slice(&[px[0], px[0], px[0], px[1]]);
            }
        }
        png::ColorType::Grayscale => {
            for &g in &buf {
                rgba.extend_from_slice(&[g, g, g, 255]);
            }
        }
        // EXPAND turns indexed data into RGB(A) before this point
        other => {
            return Err(RenderError::UnsupportedFormat(format!(
                "{other:?} PNG was not expanded"
            )));
        }
    }

    tracing::debug!(width, height, color_type = ?info.color_type, "Decoded PNG");
    Ok(RgbaImage::new(width, height, rgba)?)
}

/// Read and decode a PNG file.
pub fn read_png(path: &Path) -> Result<RgbaImage, RenderError> {
    let bytes = fs::read(path)?;
    decode_png(&bytes)
}

/// Encode an RGBA8 image as an optimized PNG.
///
/// Falls back to the unoptimized encoding if oxipng fails.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let width = u32::try_from(image.width())
        .map_err(|_| RenderError::Encode(format!("width {} too large", image.width())))?;
    let height = u32::try_from(image.height())
        .map_err(|_| RenderError::Encode(format!("height {} too large", image.height())))?;

    // Encode PNG (fast settings, oxipng will re-compress optimally)
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::Encode(e.to_string()))?;
        writer
            .write_image_data(image.as_raw())
            .map_err(|e| RenderError::Encode(e.to_string()))?;
    }
    let png_bytes = buf.into_inner();

    // Re-compress with oxipng (zopfli + adaptive filter selection)
    let optimized = match oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    ) {
        Ok(optimized) => optimized,
        Err(e) => {
            tracing::warn!(%e, "oxipng failed, keeping unoptimized PNG");
            png_bytes
        }
    };
    Ok(optimized)
}

/// Encode and write a PNG file.
pub fn write_png(path: &Path, image: &RgbaImage) -> Result<(), RenderError> {
    let bytes = encode_png(image)?;
    fs::write(path, bytes)?;
    Ok(())
}
