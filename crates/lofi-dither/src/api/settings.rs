//! Pipeline settings.

use crate::dither::{DitherAlgorithm, DitherOptions};
use crate::palette::Palette;
use crate::preprocess::{clamp_percent, ToneOptions};

/// Every knob of the pipeline as one immutable value.
///
/// Setters consume and return `self` and clamp out-of-range input rather
/// than rejecting it, so any `Settings` value is valid.
///
/// # Defaults
///
/// - scale: 4
/// - algorithm: Atkinson
/// - palette: black to white
/// - period: 4, bleed: 50
/// - tone: neutral ([`ToneOptions::default`])
/// - depth: 0 (off)
///
/// # Example
///
/// ```
/// use lofi_dither::{DitherAlgorithm, Palette, Settings};
///
/// let settings = Settings::new()
///     .scale(0)
///     .algorithm("Bayer 8x8".parse().unwrap())
///     .palette(Palette::from_hex(&["#000", "#f00", "#fff"]).unwrap())
///     .bleed(250.0);
///
/// assert_eq!(settings.get_scale(), 1);
/// assert_eq!(settings.get_bleed(), 100.0);
/// assert_eq!(settings.dither_options().levels, 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    scale: u32,
    algorithm: DitherAlgorithm,
    palette: Palette,
    period: u32,
    bleed: f64,
    tone: ToneOptions,
    depth: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scale: 4,
            algorithm: DitherAlgorithm::default(),
            palette: Palette::default(),
            period: 4,
            bleed: 50.0,
            tone: ToneOptions::default(),
            depth: 0,
        }
    }
}

impl Settings {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pixel block size; 0 counts as 1.
    #[inline]
    pub fn scale(mut self, scale: u32) -> Self {
        self.scale = scale.max(1);
        self
    }

    #[inline]
    pub fn algorithm(mut self, algorithm: DitherAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the algorithm by display name or slug, falling back to
    /// `Identity` for unknown names.
    #[inline]
    pub fn algorithm_name(self, name: &str) -> Self {
        self.algorithm(DitherAlgorithm::from_name_lossy(name))
    }

    #[inline]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Line spacing and wave/band period; 0 counts as 1.
    #[inline]
    pub fn period(mut self, period: u32) -> Self {
        self.period = period.max(1);
        self
    }

    #[inline]
    pub fn bleed(mut self, bleed: f64) -> Self {
        self.bleed = clamp_percent(bleed);
        self
    }

    #[inline]
    pub fn contrast(mut self, contrast: f64) -> Self {
        self.tone = self.tone.contrast(contrast);
        self
    }

    #[inline]
    pub fn midtones(mut self, midtones: f64) -> Self {
        self.tone = self.tone.midtones(midtones);
        self
    }

    #[inline]
    pub fn highlights(mut self, highlights: f64) -> Self {
        self.tone = self.tone.highlights(highlights);
        self
    }

    #[inline]
    pub fn threshold(mut self, threshold: u8) -> Self {
        self.tone = self.tone.threshold(threshold);
        self
    }

    #[inline]
    pub fn invert(mut self, invert: bool) -> Self {
        self.tone = self.tone.invert(invert);
        self
    }

    /// Replace all tone controls at once.
    #[inline]
    pub fn tone(mut self, tone: ToneOptions) -> Self {
        self.tone = tone
            .contrast(tone.contrast)
            .midtones(tone.midtones)
            .highlights(tone.highlights);
        self
    }

    /// Leftward smear of dark cells, in working-grid cells.
    #[inline]
    pub fn depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn get_scale(&self) -> u32 {
        self.scale
    }

    pub fn get_algorithm(&self) -> DitherAlgorithm {
        self.algorithm
    }

    pub fn get_palette(&self) -> &Palette {
        &self.palette
    }

    pub fn get_period(&self) -> u32 {
        self.period
    }

    pub fn get_bleed(&self) -> f64 {
        self.bleed
    }

    pub fn get_tone(&self) -> &ToneOptions {
        &self.tone
    }

    pub fn get_depth(&self) -> u32 {
        self.depth
    }

    /// Options handed to the dither engine; the level count follows the
    /// palette length.
    pub fn dither_options(&self) -> DitherOptions {
        DitherOptions::new()
            .levels(self.palette.len())
            .bleed(self.bleed)
            .period(self.period)
    }
}
