//! Pipeline builder: the primary ergonomic entry point for the crate.
//!
//! [`Pipeline`] wraps [`Settings`] with a fluent configuration API and runs
//! every stage in order. [`process`] and [`process_with_rng`] are the
//! one-shot equivalents.

use rand::{Rng, RngCore};

use super::{PipelineError, Settings};
use crate::dither::{dither, DitherAlgorithm};
use crate::output::{apply_depth, compose, RgbaImage};
use crate::palette::Palette;
use crate::preprocess::{resample, ToneCurve};

/// Reusable dithering pipeline.
///
/// # Design
///
/// - Configuration methods consume and return `self` (standard builder pattern)
/// - [`process()`](Self::process) takes `&self`, so one pipeline can render
///   any number of frames, including from several threads at once
/// - Nothing is cached between calls; each call allocates its own buffers
///
/// # Example
///
/// ```
/// use lofi_dither::{Palette, Pipeline, RgbaImage};
///
/// let pipeline = Pipeline::new()
///     .scale(2)
///     .algorithm_name("Bayer 4x4")
///     .palette(Palette::from_hex(&["#020a00", "#e5ff8a"]).unwrap());
///
/// let source = RgbaImage::filled(8, 6, [90, 90, 90, 255]);
/// let out = pipeline.process(&source).unwrap();
///
/// assert_eq!((out.width(), out.height()), (8, 6));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    settings: Settings,
}

impl Pipeline {
    /// A pipeline with [`Settings::default`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self { settings }
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline]
    pub fn scale(mut self, scale: u32) -> Self {
        self.settings = self.settings.scale(scale);
        self
    }

    #[inline]
    pub fn algorithm(mut self, algorithm: DitherAlgorithm) -> Self {
        self.settings = self.settings.algorithm(algorithm);
        self
    }

    #[inline]
    pub fn algorithm_name(mut self, name: &str) -> Self {
        self.settings = self.settings.algorithm_name(name);
        self
    }

    #[inline]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.settings = self.settings.palette(palette);
        self
    }

    #[inline]
    pub fn period(mut self, period: u32) -> Self {
        self.settings = self.settings.period(period);
        self
    }

    #[inline]
    pub fn bleed(mut self, bleed: f64) -> Self {
        self.settings = self.settings.bleed(bleed);
        self
    }

    #[inline]
    pub fn contrast(mut self, contrast: f64) -> Self {
        self.settings = self.settings.contrast(contrast);
        self
    }

    #[inline]
    pub fn midtones(mut self, midtones: f64) -> Self {
        self.settings = self.settings.midtones(midtones);
        self
    }

    #[inline]
    pub fn highlights(mut self, highlights: f64) -> Self {
        self.settings = self.settings.highlights(highlights);
        self
    }

    #[inline]
    pub fn threshold(mut self, threshold: u8) -> Self {
        self.settings = self.settings.threshold(threshold);
        self
    }

    #[inline]
    pub fn invert(mut self, invert: bool) -> Self {
        self.settings = self.settings.invert(invert);
        self
    }

    #[inline]
    pub fn depth(mut self, depth: u32) -> Self {
        self.settings = self.settings.depth(depth);
        self
    }

    /// Run the pipeline with a thread-local entropy-seeded generator.
    pub fn process(&self, source: &RgbaImage) -> Result<RgbaImage, PipelineError> {
        process(source, &self.settings)
    }

    /// Run the pipeline drawing randomness from `rng`.
    pub fn process_with_rng<R: Rng>(
        &self,
        source: &RgbaImage,
        rng: &mut R,
    ) -> Result<RgbaImage, PipelineError> {
        process_with_rng(source, &self.settings, rng)
    }
}

/// Render `source` with `settings`.
///
/// Random families draw from [`rand::thread_rng`]; use
/// [`process_with_rng`] for reproducible output.
pub fn process(source: &RgbaImage, settings: &Settings) -> Result<RgbaImage, PipelineError> {
    process_with_rng(source, settings, &mut rand::thread_rng())
}

/// Render `source` with `settings`, drawing randomness from `rng`.
///
/// Stages, in order:
/// 1. Resample to the working grid and extract luminance
/// 2. Apply the tone curve
/// 3. Dither to `palette.len()` levels
/// 4. Depth echo (skipped when depth is 0)
/// 5. Map through the palette gradient
/// 6. Expand back to the source size, fully opaque
///
/// The output always has the source's dimensions and never aliases it.
pub fn process_with_rng<R: Rng>(
    source: &RgbaImage,
    settings: &Settings,
    rng: &mut R,
) -> Result<RgbaImage, PipelineError> {
    if source.is_empty() {
        return Err(PipelineError::EmptyImage {
            width: source.width(),
            height: source.height(),
        });
    }

    let scale = settings.get_scale();
    let algorithm = settings.get_algorithm();
    let options = settings.dither_options();

    // 1-2. Working luminance
    let mut luma = resample(source, scale);
    ToneCurve::new(settings.get_tone()).apply(&mut luma);

    tracing::debug!(
        width = source.width(),
        height = source.height(),
        grid_width = luma.width(),
        grid_height = luma.height(),
        algorithm = algorithm.name(),
        levels = options.levels,
        "dithering frame"
    );

    // 3. Dither
    let rng: &mut dyn RngCore = rng;
    let dithered = dither(&luma, &algorithm, &options, rng);

    // 4. Depth
    let echoed = match settings.get_depth() {
        0 => dithered,
        depth => apply_depth(&dithered, depth),
    };

    // 5-6. Color and expand
    let cells = settings.get_palette().colorize(&echoed);
    Ok(compose(&cells, source.width(), source.height(), scale))
}
