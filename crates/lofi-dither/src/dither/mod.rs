//! The dither engine.
//!
//! Turns continuous luminance into a small number of evenly spaced tones.
//! Algorithms are grouped into five families:
//!
//! - **Error diffusion** ([`Diffusion`]): quantization error is pushed onto
//!   unvisited neighbours through a weighted kernel.
//! - **Ordered** ([`Ordered`]): a tiled threshold matrix or line screen
//!   offsets each cell before quantization.
//! - **Organic** ([`Organic`]): hash or random noise offsets each cell.
//! - **Modulation** ([`Modulation`]): a sine or square wave along an axis,
//!   or a serpentine scan carrying damped error.
//! - **Pattern** ([`Pattern`]): multiplicative masks and additive glitch
//!   offsets.
//!
//! Every family implements [`Dither`]. [`DitherAlgorithm`] is the closed
//! union of all of them plus [`DitherAlgorithm::Identity`], which passes
//! luminance through unquantized.
//!
//! # Example
//!
//! ```
//! use lofi_dither::{dither, DitherAlgorithm, DitherOptions, LumaBuffer};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let luma = LumaBuffer::filled(4, 4, 127);
//! let algorithm: DitherAlgorithm = "Floyd-Steinberg".parse().unwrap();
//! let mut rng = StdRng::seed_from_u64(0);
//!
//! let out = dither(&luma, &algorithm, &DitherOptions::new(), &mut rng);
//! assert!(out.as_slice().iter().all(|&v| v == 0 || v == 255));
//! ```

mod catalogue;
mod diffusion;
mod kernel;
mod modulation;
mod options;
mod ordered;
mod organic;
mod pattern;
mod quantize;

use std::fmt;
use std::str::FromStr;

use rand::RngCore;

pub use catalogue::slug;
pub use diffusion::{diffuse_ostromoukhov, diffuse_with_kernel, Diffusion, DiffusionWindow};
pub use kernel::*;
pub use modulation::{riemersma_damping, wave_threshold, Axis, Modulation, Waveform};
pub use options::DitherOptions;
pub use ordered::{
    BayerSize, LineDirection, Ordered, ThresholdMatrix, BAYER_16, BAYER_2, BAYER_4, BAYER_8, KNOLL,
};
pub use organic::{hash_noise, Organic};
pub use pattern::{Glitch, Pattern};
pub use quantize::Quantizer;

use crate::api::UnknownAlgorithm;
use crate::luma::LumaBuffer;

/// A dithering algorithm over a single-channel luminance grid.
///
/// Implementations read `luma`, never modify it, and return a fresh buffer
/// of the same size whose cells are all tones of
/// [`DitherOptions::quantizer`]. Families that need randomness draw from
/// `rng` in raster order; deterministic families ignore it.
pub trait Dither {
    fn dither(&self, luma: &LumaBuffer, options: &DitherOptions, rng: &mut dyn RngCore) -> LumaBuffer;
}

/// Algorithm families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    ErrorDiffusion,
    Ordered,
    Organic,
    Modulation,
    Pattern,
}

impl Family {
    pub const ALL: [Family; 5] = [
        Family::ErrorDiffusion,
        Family::Ordered,
        Family::Organic,
        Family::Modulation,
        Family::Pattern,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Family::ErrorDiffusion => "Error Diffusion",
            Family::Ordered => "Ordered (Bitmap)",
            Family::Organic => "Organic",
            Family::Modulation => "Modulation",
            Family::Pattern => "Pattern",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Menu grouping: the glitch effects are listed apart from the patterns
/// they are implemented with.
pub const RETRO_FX_CATEGORY: &str = "Retro / FX";

/// Every supported algorithm, with its typed parameters.
///
/// Parse from a display name (`"Bayer 4x4"`) or slug (`"bayer-4x4"`) with
/// [`FromStr`], which rejects unknown names, or with
/// [`DitherAlgorithm::from_name_lossy`], which falls back to
/// [`Identity`](DitherAlgorithm::Identity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DitherAlgorithm {
    /// Tone-shaped luminance, unquantized.
    Identity,
    Diffusion(Diffusion),
    Ordered(Ordered),
    Organic(Organic),
    Modulation(Modulation),
    Pattern(Pattern),
}

impl Default for DitherAlgorithm {
    fn default() -> Self {
        DitherAlgorithm::Diffusion(Diffusion::Atkinson)
    }
}

impl DitherAlgorithm {
    /// Every named algorithm in menu order (excludes `Identity`).
    pub fn all() -> impl Iterator<Item = DitherAlgorithm> {
        catalogue::CATALOGUE.iter().map(|(_, algorithm)| *algorithm)
    }

    /// Display name; `"None"` for `Identity`.
    pub fn name(&self) -> &'static str {
        catalogue::name_of(self)
    }

    /// Kebab-case form of [`name`](Self::name).
    pub fn slug(&self) -> String {
        slug(self.name())
    }

    /// Family, or `None` for `Identity`.
    pub fn family(&self) -> Option<Family> {
        match *self {
            DitherAlgorithm::Identity => None,
            DitherAlgorithm::Diffusion(_) => Some(Family::ErrorDiffusion),
            DitherAlgorithm::Ordered(_) => Some(Family::Ordered),
            DitherAlgorithm::Organic(_) => Some(Family::Organic),
            DitherAlgorithm::Modulation(_) => Some(Family::Modulation),
            DitherAlgorithm::Pattern(_) => Some(Family::Pattern),
        }
    }

    /// Menu category: the family name, except glitches which are listed
    /// under [`RETRO_FX_CATEGORY`].
    pub fn category(&self) -> &'static str {
        match *self {
            DitherAlgorithm::Pattern(Pattern::Glitch(_)) => RETRO_FX_CATEGORY,
            other => other.family().map_or("None", |f| f.name()),
        }
    }

    /// `true` if the output depends on the random generator.
    pub fn is_random(&self) -> bool {
        match *self {
            DitherAlgorithm::Organic(organic) => organic.is_random(),
            DitherAlgorithm::Pattern(pattern) => pattern.is_random(),
            _ => false,
        }
    }

    /// Resolve a name, logging and falling back to `Identity` when unknown.
    pub fn from_name_lossy(name: &str) -> Self {
        catalogue::lookup(name).unwrap_or_else(|err| {
            tracing::warn!(name, "{err}; passing luminance through undithered");
            DitherAlgorithm::Identity
        })
    }
}

impl FromStr for DitherAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        catalogue::lookup(s)
    }
}

impl fmt::Display for DitherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Dither for DitherAlgorithm {
    fn dither(&self, luma: &LumaBuffer, options: &DitherOptions, rng: &mut dyn RngCore) -> LumaBuffer {
        match *self {
            DitherAlgorithm::Identity => luma.clone(),
            DitherAlgorithm::Diffusion(d) => d.dither(luma, options, rng),
            DitherAlgorithm::Ordered(o) => o.dither(luma, options, rng),
            DitherAlgorithm::Organic(o) => o.dither(luma, options, rng),
            DitherAlgorithm::Modulation(m) => m.dither(luma, options, rng),
            DitherAlgorithm::Pattern(p) => p.dither(luma, options, rng),
        }
    }
}

/// Run `algorithm` over `luma`.
pub fn dither(
    luma: &LumaBuffer,
    algorithm: &DitherAlgorithm,
    options: &DitherOptions,
    rng: &mut dyn RngCore,
) -> LumaBuffer {
    algorithm.dither(luma, options, rng)
}
