//! Level quantizer shared by every dither family.

use crate::luma::to_byte;

/// Snaps continuous values in `0..=255` to `levels` evenly spaced tones.
///
/// With `L` levels the tones are `k / (L - 1) * 255` for `k` in `0..L`, so
/// black and white are always representable. Fewer than two levels is
/// treated as two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantizer {
    levels: usize,
}

impl Quantizer {
    pub fn new(levels: usize) -> Self {
        Self {
            levels: levels.max(2),
        }
    }

    #[inline]
    pub fn levels(&self) -> usize {
        self.levels
    }

    /// Nearest tone to `value`, as an unrounded float.
    ///
    /// The input is clamped first, so error-laden values outside the byte
    /// range still land on the darkest or brightest tone.
    #[inline]
    pub fn quantize(&self, value: f64) -> f64 {
        let steps = (self.levels - 1) as f64;
        let clamped = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 255.0)
        };
        let idx = (clamped / 255.0 * steps + 0.5).floor();
        idx / steps * 255.0
    }

    /// Nearest tone to `value`, rounded to the byte that gets stored.
    #[inline]
    pub fn quantize_byte(&self, value: f64) -> u8 {
        to_byte(self.quantize(value))
    }

    /// Every byte this quantizer can emit, darkest first.
    pub fn level_bytes(&self) -> Vec<u8> {
        let steps = (self.levels - 1) as f64;
        (0..self.levels)
            .map(|k| to_byte(k as f64 / steps * 255.0))
            .collect()
    }

    /// `true` if `byte` is one of the tones.
    pub fn is_level(&self, byte: u8) -> bool {
        self.level_bytes().contains(&byte)
    }
}
