//! Organic (stochastic) dithering: per-cell noise jitter.

use rand::{Rng, RngCore};

use super::{Dither, DitherOptions};
use crate::luma::{to_byte, LumaBuffer};

/// Stochastic variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Organic {
    /// Deterministic hash noise; same input, same output.
    BlueNoise,
    /// Uniform random jitter in roughly `-89..=89`.
    WhiteNoise,
    /// Rough stippling; currently identical to [`Organic::Stipple`].
    Voronoi,
    /// Uniform random jitter in `-60..60`.
    Stipple,
}

/// Hash noise byte for cell `(x, y)`: `frac(|sin(x*12.9898 + y*78.233) * 43758.5453|) * 255`.
#[inline]
pub fn hash_noise(x: usize, y: usize) -> u8 {
    let n = ((x as f64 * 12.9898 + y as f64 * 78.233).sin() * 43758.5453).abs() % 1.0;
    to_byte(n * 255.0)
}

impl Organic {
    pub fn is_random(&self) -> bool {
        !matches!(self, Organic::BlueNoise)
    }
}

impl Dither for Organic {
    fn dither(&self, luma: &LumaBuffer, options: &DitherOptions, rng: &mut dyn RngCore) -> LumaBuffer {
        let quantizer = options.quantizer();
        luma.map_cells(|x, y, g| {
            let jitter = match self {
                Organic::BlueNoise => (f64::from(hash_noise(x, y)) - 127.0) * 0.7,
                Organic::WhiteNoise => (rng.gen::<f64>() * 255.0 - 127.0) * 0.7,
                Organic::Voronoi | Organic::Stipple => (rng.gen::<f64>() - 0.5) * 120.0,
            };
            quantizer.quantize_byte(f64::from(g) + jitter)
        })
    }
}
