//! Ordered (bitmap) dithering: tiled threshold matrices and line screens.
//!
//! A per-cell jitter is added to the luminance before quantization. For
//! matrices the jitter comes from the tiled threshold value; for line
//! screens it alternates between a dark and a light band every half period.

use super::{Dither, DitherOptions};
use crate::luma::LumaBuffer;
use rand::RngCore;

/// Raw 2x2 Bayer index matrix (0..4).
pub const BAYER_2: [u8; 4] = [0, 2, 3, 1];

/// Raw 4x4 Bayer index matrix (0..16).
pub const BAYER_4: [u8; 16] = [0, 8, 2, 10, 12, 4, 14, 6, 3, 11, 1, 9, 15, 7, 13, 5];

/// Raw 8x8 Bayer index matrix (0..64).
#[rustfmt::skip]
pub const BAYER_8: [u8; 64] = [
     0, 32,  8, 40,  2, 34, 10, 42,
    48, 16, 56, 24, 50, 18, 58, 26,
    12, 44,  4, 36, 14, 46,  6, 38,
    60, 28, 52, 20, 62, 30, 54, 22,
     3, 35, 11, 43,  1, 33,  9, 41,
    51, 19, 59, 27, 49, 17, 57, 25,
    15, 47,  7, 39, 13, 45,  5, 37,
    63, 31, 55, 23, 61, 29, 53, 21,
];

/// Raw 16x16 Bayer index matrix (0..256), `4 * B8 + B2` recursively.
pub const BAYER_16: [u8; 256] = bayer_16();

const fn bayer_16() -> [u8; 256] {
    let mut m = [0u8; 256];
    let mut y = 0;
    while y < 16 {
        let mut x = 0;
        while x < 16 {
            m[y * 16 + x] = 4 * BAYER_8[(y % 8) * 8 + x % 8] + BAYER_2[(y / 8) * 2 + x / 8];
            x += 1;
        }
        y += 1;
    }
    m
}

/// 4x4 clustered-dot matrix (1..=16). Thresholds grow outward from a
/// centre, so dots build up as clumps instead of a dispersed grid.
pub const KNOLL: [u8; 16] = [6, 12, 10, 16, 8, 4, 14, 2, 11, 15, 9, 13, 5, 7, 3, 1];

const MATRIX_JITTER: f64 = 0.6;
const LINE_JITTER: f64 = 60.0;

/// A square threshold tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdMatrix {
    pub size: usize,
    /// Row-major raw indices.
    pub cells: &'static [u8],
    /// Multiplier taking raw indices to the 0..=256 threshold range.
    pub scale: u16,
}

impl ThresholdMatrix {
    /// Threshold at `(x, y)`, tiled across the plane.
    #[inline]
    pub fn threshold(&self, x: usize, y: usize) -> f64 {
        let raw = self.cells[(y % self.size) * self.size + x % self.size];
        f64::from(raw) * f64::from(self.scale)
    }
}

/// Bayer matrix orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BayerSize {
    Two,
    Four,
    Eight,
    Sixteen,
}

impl BayerSize {
    pub fn matrix(&self) -> ThresholdMatrix {
        // Scale by 256 / (n * n).
        match self {
            BayerSize::Two => ThresholdMatrix {
                size: 2,
                cells: &BAYER_2,
                scale: 64,
            },
            BayerSize::Four => ThresholdMatrix {
                size: 4,
                cells: &BAYER_4,
                scale: 16,
            },
            BayerSize::Eight => ThresholdMatrix {
                size: 8,
                cells: &BAYER_8,
                scale: 4,
            },
            BayerSize::Sixteen => ThresholdMatrix {
                size: 16,
                cells: &BAYER_16,
                scale: 1,
            },
        }
    }
}

/// Direction a line screen runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineDirection {
    /// Bands stacked along y.
    Horizontal,
    /// Bands stacked along x.
    Vertical,
    /// Bands stacked along x + y.
    Diagonal,
}

impl LineDirection {
    #[inline]
    fn coordinate(&self, x: usize, y: usize) -> usize {
        match self {
            LineDirection::Horizontal => y,
            LineDirection::Vertical => x,
            LineDirection::Diagonal => x + y,
        }
    }
}

/// Ordered dithering variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ordered {
    Bayer(BayerSize),
    Knoll,
    Lines(LineDirection),
}

impl Ordered {
    /// Threshold tile, or `None` for line screens.
    pub fn matrix(&self) -> Option<ThresholdMatrix> {
        match self {
            Ordered::Bayer(size) => Some(size.matrix()),
            Ordered::Knoll => Some(ThresholdMatrix {
                size: 4,
                cells: &KNOLL,
                scale: 16,
            }),
            Ordered::Lines(_) => None,
        }
    }
}

impl Dither for Ordered {
    fn dither(&self, luma: &LumaBuffer, options: &DitherOptions, _rng: &mut dyn RngCore) -> LumaBuffer {
        let quantizer = options.quantizer();
        let period = options.period.max(1) as usize;
        let half = period as f64 / 2.0;
        let matrix = self.matrix();

        luma.map_cells(|x, y, g| {
            let jitter = match (matrix, self) {
                (Some(m), _) => (m.threshold(x, y) - 127.0) * MATRIX_JITTER,
                (None, Ordered::Lines(direction)) => {
                    if ((direction.coordinate(x, y) % period) as f64) < half {
                        -LINE_JITTER
                    } else {
                        LINE_JITTER
                    }
                }
                (None, _) => 0.0,
            };
            quantizer.quantize_byte(f64::from(g) + jitter)
        })
    }
}
