//! Frame rendering: the rendering-surface steps around one pipeline call,
//! and parallel batches of independent frames.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use lofi_dither::{process, process_with_rng, RgbaImage, Settings};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use super::blur::gaussian_blur;
use super::fit::fit_within;
use super::png_io::{read_png, write_png};
use crate::error::RenderError;
use crate::models::{AppConfig, RenderDefaults};

/// Everything needed to turn a source frame into an output frame
#[derive(Debug, Clone)]
pub struct RenderJob {
    pub settings: Settings,
    /// Pre-blur radius in source pixels (0 = off)
    pub blur: u32,
    /// Fit the source inside a `max_size` square first
    pub max_size: Option<u32>,
    /// Base seed; frame `i` uses `seed + i`. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl RenderJob {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            blur: 0,
            max_size: None,
            seed: None,
        }
    }

    /// Job for `defaults`, with the palette resolved against `config`'s
    /// preset groups.
    pub fn from_defaults(config: &AppConfig, defaults: &RenderDefaults) -> Result<Self, RenderError> {
        let palette = config.resolve_palette(
            &defaults.palette_group,
            defaults.palette_index,
            &defaults.custom_stops,
        )?;
        Ok(Self {
            settings: defaults.settings(palette),
            blur: defaults.blur,
            max_size: defaults.max_size,
            seed: None,
        })
    }

    /// Render one in-memory frame.
    ///
    /// Order: fit, pre-blur, then the dithering pipeline.
    pub fn render_frame(&self, source: &RgbaImage, frame_index: usize) -> Result<RgbaImage, RenderError> {
        let fitted = match self.max_size {
            Some(max) => fit_within(source, max)?,
            None => Cow::Borrowed(source),
        };
        let blurred = if self.blur > 0 {
            Cow::Owned(gaussian_blur(&fitted, self.blur)?)
        } else {
            fitted
        };

        let out = match self.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(frame_index as u64));
                process_with_rng(&blurred, &self.settings, &mut rng)?
            }
            None => process(&blurred, &self.settings)?,
        };
        Ok(out)
    }

    /// Read, render and write one file.
    pub fn render_file(&self, input: &Path, output: &Path, frame_index: usize) -> Result<(), RenderError> {
        let source = read_png(input)?;
        let out = self.render_frame(&source, frame_index)?;
        write_png(output, &out)?;
        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            width = out.width(),
            height = out.height(),
            "Rendered frame"
        );
        Ok(())
    }

    /// Render every input into `output_dir` in parallel.
    ///
    /// Frames are independent: one failing does not stop the others.
    /// Outcomes are returned in input order.
    pub fn render_batch(&self, inputs: &[PathBuf], output_dir: &Path) -> Vec<FrameOutcome> {
        inputs
            .par_iter()
            .enumerate()
            .map(|(index, input)| {
                let output = output_path_for(input, output_dir);
                let result = self
                    .render_file(input, &output, index)
                    .map(|()| output);
                if let Err(ref e) = result {
                    tracing::warn!(input = %input.display(), %e, "Frame failed");
                }
                FrameOutcome {
                    input: input.clone(),
                    result,
                }
            })
            .collect()
    }
}

/// Result of rendering one input file
#[derive(Debug)]
pub struct FrameOutcome {
    pub input: PathBuf,
    /// Path written on success
    pub result: Result<PathBuf, RenderError>,
}

/// `<output_dir>/<input stem>.png`
pub fn output_path_for(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".to_string());
    output_dir.join(format!("{stem}.png"))
}
