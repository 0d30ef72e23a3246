//! Assertion helpers for tests.

use std::collections::BTreeSet;
use std::path::Path;

use lofi_dither::{Palette, Quantizer, RgbaImage};
use pretty_assertions::assert_eq;

/// Assert the file at `path` is a PNG and return its decoded image
pub fn assert_png_file(path: &Path) -> RgbaImage {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected PNG at {}: {e}", path.display()));
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG signature in {}, got {:?}",
        path.display(),
        &bytes[..8.min(bytes.len())]
    );
    lofi::rendering::decode_png(&bytes).expect("PNG should decode")
}

/// Assert image dimensions
pub fn assert_size(image: &RgbaImage, width: usize, height: usize) {
    assert_eq!(
        (image.width(), image.height()),
        (width, height),
        "Unexpected image size"
    );
}

/// Distinct RGB colors used by `image`
pub fn distinct_colors(image: &RgbaImage) -> BTreeSet<[u8; 3]> {
    image
        .as_raw()
        .chunks_exact(4)
        .map(|px| [px[0], px[1], px[2]])
        .collect()
}

/// Colors a palette can produce from dithered output: each quantizer
/// level mapped through the gradient
pub fn palette_level_colors(palette: &Palette) -> BTreeSet<[u8; 3]> {
    Quantizer::new(palette.len())
        .level_bytes()
        .into_iter()
        .map(|v| {
            let c = palette.map(v);
            [c.r, c.g, c.b]
        })
        .collect()
}

/// Assert every pixel is a palette level color and fully opaque
pub fn assert_only_palette_levels(image: &RgbaImage, palette: &Palette) {
    let allowed = palette_level_colors(palette);
    for px in image.as_raw().chunks_exact(4) {
        assert!(
            allowed.contains(&[px[0], px[1], px[2]]),
            "Color {:?} is not a palette level ({allowed:?})",
            &px[..3]
        );
        assert_eq!(px[3], 255, "Output must be opaque");
    }
}

/// Assert each `scale x scale` block is a single color
pub fn assert_blocky(image: &RgbaImage, scale: usize) {
    for y in 0..image.height() {
        for x in 0..image.width() {
            let anchor = image.pixel(x / scale * scale, y / scale * scale);
            assert_eq!(image.pixel(x, y), anchor, "Pixel ({x}, {y}) differs from its block");
        }
    }
}
