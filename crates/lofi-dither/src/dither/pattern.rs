//! Pattern and glitch effects.
//!
//! Patterns scale luminance by a per-cell factor; glitches add a signed
//! offset. Either way the result is clamped and quantized like every other
//! family.

use rand::{Rng, RngCore};

use super::{Dither, DitherOptions};
use crate::luma::LumaBuffer;

/// Additive FX offsets, grouped as "Retro / FX" in the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glitch {
    /// Column bands, +70 / -40 with +-20 noise.
    Vertical,
    /// Row bands, +60 / -50 with +-25 noise.
    Horizontal,
    /// Diagonal bands, +80 / -60.
    DiagonalShred,
    /// Concentric sine rings around the centre.
    RadialBurst,
    /// Heavy uniform noise, +-90.
    NoiseField,
    SineX,
    SineY,
    /// Slanted sine contours.
    Topography,
}

impl Glitch {
    pub fn is_random(&self) -> bool {
        matches!(self, Glitch::Vertical | Glitch::Horizontal | Glitch::NoiseField)
    }
}

/// Pattern variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    Checker,
    Grid,
    RandomDots,
    InterleavedGradient,
    Glitch(Glitch),
}

impl Pattern {
    pub fn is_random(&self) -> bool {
        match self {
            Pattern::RandomDots => true,
            Pattern::Glitch(glitch) => glitch.is_random(),
            _ => false,
        }
    }
}

struct Frame {
    p: f64,
    period: usize,
    cx: f64,
    cy: f64,
}

impl Dither for Pattern {
    fn dither(&self, luma: &LumaBuffer, options: &DitherOptions, rng: &mut dyn RngCore) -> LumaBuffer {
        let quantizer = options.quantizer();
        let frame = Frame {
            p: options.period_f64(),
            period: options.period.max(1) as usize,
            cx: luma.width() as f64 / 2.0,
            cy: luma.height() as f64 / 2.0,
        };

        luma.map_cells(|x, y, g| {
            let v = shade(*self, &frame, x, y, f64::from(g), rng);
            quantizer.quantize_byte(v)
        })
    }
}

fn shade(pattern: Pattern, f: &Frame, x: usize, y: usize, g: f64, rng: &mut dyn RngCore) -> f64 {
    match pattern {
        Pattern::Checker => g * if (x + y) % 2 == 0 { 1.1 } else { 0.9 },
        Pattern::Grid => {
            let on_line = x % f.period == 0 || y % f.period == 0;
            g * if on_line { 1.25 } else { 0.9 }
        }
        Pattern::RandomDots => g * if rng.gen::<f64>() > 0.5 { 1.2 } else { 0.8 },
        Pattern::InterleavedGradient => {
            let ramp = ((x * y) % 255) as f64;
            g * if g > ramp { 1.15 } else { 0.85 }
        }
        Pattern::Glitch(glitch) => g + glitch_offset(glitch, f, x, y, rng),
    }
}

fn glitch_offset(glitch: Glitch, f: &Frame, x: usize, y: usize, rng: &mut dyn RngCore) -> f64 {
    let (xf, yf) = (x as f64, y as f64);
    let band = |c: usize| c % (2 * f.period) < f.period;
    match glitch {
        Glitch::Vertical => {
            let base = if band(x) { 70.0 } else { -40.0 };
            base + (rng.gen::<f64>() - 0.5) * 40.0
        }
        Glitch::Horizontal => {
            let base = if band(y) { 60.0 } else { -50.0 };
            base + (rng.gen::<f64>() - 0.5) * 50.0
        }
        Glitch::DiagonalShred => {
            if band(x + y) {
                80.0
            } else {
                -60.0
            }
        }
        Glitch::RadialBurst => {
            let dist = (xf - f.cx).hypot(yf - f.cy);
            (dist / (f.p * 1.3)).sin() * 120.0
        }
        Glitch::NoiseField => (rng.gen::<f64>() - 0.5) * 180.0,
        Glitch::SineX => (xf / (f.p * 0.7)).sin() * 120.0,
        Glitch::SineY => (yf / (f.p * 0.7)).sin() * 120.0,
        Glitch::Topography => ((yf + xf * 0.4) / (f.p * 1.2)).sin() * 110.0,
    }
}
