//! Display names for every algorithm, and lookup by name or slug.

use super::{
    Axis, BayerSize, DitherAlgorithm, Diffusion, Glitch, LineDirection, Modulation, Ordered,
    Organic, Pattern, Waveform,
};
use crate::api::UnknownAlgorithm;

use super::DitherAlgorithm as A;

/// Every named algorithm in menu order, grouped by category.
///
/// "Square Wave Y" and "Square Circular Wave" extend the square waveform to
/// the y and radial axes; the classic menu only offers it along x.
pub(crate) const CATALOGUE: &[(&str, DitherAlgorithm)] = &[
    ("Floyd-Steinberg", A::Diffusion(Diffusion::FloydSteinberg)),
    ("Atkinson", A::Diffusion(Diffusion::Atkinson)),
    ("Jarvis-Judice-Ninke", A::Diffusion(Diffusion::JarvisJudiceNinke)),
    ("Stucki", A::Diffusion(Diffusion::Stucki)),
    ("Burkes", A::Diffusion(Diffusion::Burkes)),
    ("Sierra", A::Diffusion(Diffusion::Sierra)),
    ("Two-Row Sierra", A::Diffusion(Diffusion::TwoRowSierra)),
    ("Sierra Lite", A::Diffusion(Diffusion::SierraLite)),
    ("Ostromoukhov", A::Diffusion(Diffusion::Ostromoukhov)),
    ("Bayer 2x2", A::Ordered(Ordered::Bayer(BayerSize::Two))),
    ("Bayer 4x4", A::Ordered(Ordered::Bayer(BayerSize::Four))),
    ("Bayer 8x8", A::Ordered(Ordered::Bayer(BayerSize::Eight))),
    ("Bayer 16x16", A::Ordered(Ordered::Bayer(BayerSize::Sixteen))),
    ("Knoll (Clustered)", A::Ordered(Ordered::Knoll)),
    ("Horizontal Lines", A::Ordered(Ordered::Lines(LineDirection::Horizontal))),
    ("Vertical Lines", A::Ordered(Ordered::Lines(LineDirection::Vertical))),
    ("Diagonal Lines", A::Ordered(Ordered::Lines(LineDirection::Diagonal))),
    ("Blue Noise", A::Organic(Organic::BlueNoise)),
    ("White Noise", A::Organic(Organic::WhiteNoise)),
    ("Voronoi Stippling (Rough)", A::Organic(Organic::Voronoi)),
    ("Stipple Pattern", A::Organic(Organic::Stipple)),
    ("Sine Wave X", A::Modulation(Modulation::Wave { axis: Axis::X, waveform: Waveform::Sine })),
    ("Sine Wave Y", A::Modulation(Modulation::Wave { axis: Axis::Y, waveform: Waveform::Sine })),
    ("Circular Wave", A::Modulation(Modulation::Wave { axis: Axis::Radial, waveform: Waveform::Sine })),
    ("Square Wave X", A::Modulation(Modulation::Wave { axis: Axis::X, waveform: Waveform::Square })),
    ("Square Wave Y", A::Modulation(Modulation::Wave { axis: Axis::Y, waveform: Waveform::Square })),
    ("Square Circular Wave", A::Modulation(Modulation::Wave { axis: Axis::Radial, waveform: Waveform::Square })),
    ("Riemersma (Snake Scan)", A::Modulation(Modulation::Riemersma)),
    ("Checkerboard", A::Pattern(Pattern::Checker)),
    ("Grid Pattern", A::Pattern(Pattern::Grid)),
    ("Random Dots", A::Pattern(Pattern::RandomDots)),
    ("Interleaved Gradient", A::Pattern(Pattern::InterleavedGradient)),
    ("Glitch Vertical", A::Pattern(Pattern::Glitch(Glitch::Vertical))),
    ("Glitch Horizontal", A::Pattern(Pattern::Glitch(Glitch::Horizontal))),
    ("Diagonal Shred", A::Pattern(Pattern::Glitch(Glitch::DiagonalShred))),
    ("Radial Burst", A::Pattern(Pattern::Glitch(Glitch::RadialBurst))),
    ("Noise Field", A::Pattern(Pattern::Glitch(Glitch::NoiseField))),
    ("Sine Modulation X", A::Pattern(Pattern::Glitch(Glitch::SineX))),
    ("Sine Modulation Y", A::Pattern(Pattern::Glitch(Glitch::SineY))),
    ("Topography Lines", A::Pattern(Pattern::Glitch(Glitch::Topography))),
];

/// Name shown for [`DitherAlgorithm::Identity`].
pub(crate) const IDENTITY_NAME: &str = "None";

/// Lower-case kebab form: `"Knoll (Clustered)"` -> `"knoll-clustered"`.
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}

pub(crate) fn name_of(algorithm: &DitherAlgorithm) -> &'static str {
    CATALOGUE
        .iter()
        .find(|(_, a)| a == algorithm)
        .map(|(name, _)| *name)
        .unwrap_or(IDENTITY_NAME)
}

/// Strict lookup by display name or slug, ignoring case and punctuation.
pub(crate) fn lookup(name: &str) -> Result<DitherAlgorithm, UnknownAlgorithm> {
    let wanted = slug(name);
    if wanted == slug(IDENTITY_NAME) || wanted == "identity" {
        return Ok(DitherAlgorithm::Identity);
    }
    CATALOGUE
        .iter()
        .find(|(display, _)| slug(display) == wanted)
        .map(|(_, algorithm)| *algorithm)
        .ok_or_else(|| UnknownAlgorithm {
            name: name.to_string(),
        })
}
