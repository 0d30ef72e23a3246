//! Tone shaping: contrast, threshold bias, midtone/highlight split, invert.
//!
//! All tone controls collapse into a single 256-entry lookup table that is
//! built once per call and applied to every cell.

use crate::luma::{to_byte, LumaBuffer};

/// Contrast value at which the contrast stage is skipped entirely.
pub const NEUTRAL_CONTRAST: f64 = 45.0;

/// Tone controls, each clamped to its documented range by the setters.
///
/// # Defaults
///
/// The defaults are neutral: the resulting [`ToneCurve`] is the identity.
///
/// - contrast: 45 (0..=100)
/// - midtones: 50 (0..=100, scales the lower half)
/// - highlights: 50 (0..=100, scales the upper half around 0.5)
/// - threshold: 128 (shifts input by `128 - threshold`)
/// - invert: `false`
///
/// ```
/// use lofi_dither::{ToneCurve, ToneOptions};
///
/// let curve = ToneCurve::new(&ToneOptions::new().invert(true));
/// assert_eq!(curve.lookup(0), 255);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneOptions {
    pub contrast: f64,
    pub midtones: f64,
    pub highlights: f64,
    pub threshold: u8,
    pub invert: bool,
}

impl Default for ToneOptions {
    fn default() -> Self {
        Self {
            contrast: NEUTRAL_CONTRAST,
            midtones: 50.0,
            highlights: 50.0,
            threshold: 128,
            invert: false,
        }
    }
}

impl ToneOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contrast(mut self, contrast: f64) -> Self {
        self.contrast = clamp_percent(contrast);
        self
    }

    #[inline]
    pub fn midtones(mut self, midtones: f64) -> Self {
        self.midtones = clamp_percent(midtones);
        self
    }

    #[inline]
    pub fn highlights(mut self, highlights: f64) -> Self {
        self.highlights = clamp_percent(highlights);
        self
    }

    #[inline]
    pub fn threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    #[inline]
    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }
}

/// Clamp to `0..=100`; NaN becomes 0.
#[inline]
pub(crate) fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// A 256-entry luminance remapping table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneCurve {
    lut: [u8; 256],
}

impl ToneCurve {
    /// Build the table from tone options.
    pub fn new(options: &ToneOptions) -> Self {
        let contrast = options.contrast;
        let factor = (259.0 * (contrast + 255.0)) / (255.0 * (259.0 - contrast));
        let bias = 128.0 - f64::from(options.threshold);

        let mut lut = [0u8; 256];
        for (i, entry) in lut.iter_mut().enumerate() {
            let mut v = i as f64 + bias;
            if contrast != NEUTRAL_CONTRAST {
                v = factor * (v - 128.0) + 128.0;
            }
            v = v.clamp(0.0, 255.0);

            let mut n = v / 255.0;
            if n < 0.5 {
                n *= options.midtones / 50.0;
            } else {
                n = 0.5 + (n - 0.5) * (options.highlights / 50.0);
            }
            v = n * 255.0;

            if options.invert {
                v = 255.0 - v;
            }
            *entry = to_byte(v);
        }
        Self { lut }
    }

    #[inline]
    pub fn lookup(&self, value: u8) -> u8 {
        self.lut[value as usize]
    }

    #[inline]
    pub fn as_table(&self) -> &[u8; 256] {
        &self.lut
    }

    /// `true` when every entry maps to itself.
    pub fn is_identity(&self) -> bool {
        self.lut.iter().enumerate().all(|(i, &v)| i == v as usize)
    }

    /// Remap every cell in place.
    pub fn apply(&self, luma: &mut LumaBuffer) {
        for v in luma.as_mut_slice() {
            *v = self.lut[*v as usize];
        }
    }
}

impl Default for ToneCurve {
    fn default() -> Self {
        Self::new(&ToneOptions::default())
    }
}
