//! Dithering options and configuration.

use super::Quantizer;

/// Per-call knobs shared by the dither families.
///
/// # Defaults
///
/// - levels: 2 (black and white)
/// - bleed: 50 (error diffusion passes on exactly its kernel's share)
/// - period: 4 (line spacing, wave frequency, glitch band width)
///
/// # Example
///
/// ```
/// use lofi_dither::DitherOptions;
///
/// let options = DitherOptions::new().levels(4).bleed(80.0).period(6);
/// assert!((options.bleed_factor() - 1.3).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DitherOptions {
    /// Number of output tones (at least 2).
    pub levels: usize,

    /// Error bleed in `0..=100`.
    ///
    /// Scales the diffused error by `0.5 + bleed / 100`, so 0 halves it,
    /// 50 leaves it unchanged, and 100 amplifies it by 1.5.
    pub bleed: f64,

    /// Spatial period in cells, at least 1.
    pub period: u32,
}

impl Default for DitherOptions {
    fn default() -> Self {
        Self {
            levels: 2,
            bleed: 50.0,
            period: 4,
        }
    }
}

impl DitherOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn levels(mut self, levels: usize) -> Self {
        self.levels = levels.max(2);
        self
    }

    #[inline]
    pub fn bleed(mut self, bleed: f64) -> Self {
        self.bleed = crate::preprocess::clamp_percent(bleed);
        self
    }

    #[inline]
    pub fn period(mut self, period: u32) -> Self {
        self.period = period.max(1);
        self
    }

    /// Multiplier applied to diffused error.
    #[inline]
    pub fn bleed_factor(&self) -> f64 {
        0.5 + self.bleed / 100.0
    }

    /// Period as a float, never below 1.
    #[inline]
    pub(crate) fn period_f64(&self) -> f64 {
        f64::from(self.period.max(1))
    }

    #[inline]
    pub fn quantizer(&self) -> Quantizer {
        Quantizer::new(self.levels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let opts = DitherOptions::default();
        assert_eq!(opts.levels, 2);
        assert_eq!(opts.period, 4);
        assert!((opts.bleed_factor() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_builder_clamps() {
        let opts = DitherOptions::new().levels(1).bleed(180.0).period(0);
        assert_eq!(opts.levels, 2);
        assert_eq!(opts.bleed, 100.0);
        assert_eq!(opts.period, 1);
        assert!((opts.bleed_factor() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_bleed_halves_error() {
        let opts = DitherOptions::new().bleed(0.0);
        assert!((opts.bleed_factor() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_builder_chaining_keeps_other_fields() {
        let opts = DitherOptions::new().period(9);
        assert_eq!(opts.levels, 2);
        assert_eq!(opts.bleed, 50.0);
        assert_eq!(opts.quantizer().levels(), 2);
    }
}
