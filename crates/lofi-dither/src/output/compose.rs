//! Nearest-neighbour expansion of the colored working grid back to the
//! source frame.

use super::RgbaImage;
use crate::color::Rgb;

/// Per-cell colors at working resolution, produced by
/// [`Palette::colorize`](crate::Palette::colorize).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorCells {
    width: usize,
    height: usize,
    colors: Vec<Rgb>,
}

impl ColorCells {
    pub fn new(width: usize, height: usize, colors: Vec<Rgb>) -> Self {
        debug_assert_eq!(
            colors.len(),
            width * height,
            "cell count ({}) must match width * height ({}x{}={})",
            colors.len(),
            width,
            height,
            width * height,
        );
        Self {
            width,
            height,
            colors,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.colors[y * self.width + x]
    }
}

/// Expand `cells` to a `width x height` frame, `scale` source pixels per cell.
///
/// Pixel `(X, Y)` takes the color of cell `(min(X/s, w-1), min(Y/s, h-1))`,
/// so the right and bottom edges left over by the integer division repeat the
/// last cell instead of staying transparent. Alpha is always 255.
pub fn compose(cells: &ColorCells, width: usize, height: usize, scale: u32) -> RgbaImage {
    let s = scale.max(1) as usize;
    let max_x = cells.width().saturating_sub(1);
    let max_y = cells.height().saturating_sub(1);

    RgbaImage::from_fn(width, height, |x, y| {
        cells.get((x / s).min(max_x), (y / s).min(max_y)).to_rgba()
    })
}
