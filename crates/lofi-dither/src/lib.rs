#![allow(clippy::needless_range_loop, clippy::module_inception)]

//! lofi-dither: stylized low-bit-depth dithering
//!
//! This library turns an RGBA bitmap into a blocky, few-tone, palette-mapped
//! rendition of itself, the look of early handhelds, newsprint halftones and
//! glitchy VHS stills.
//!
//! # Quick Start
//!
//! The [`Pipeline`] builder is the primary entry point:
//!
//! ```
//! use lofi_dither::{Palette, Pipeline, RgbaImage};
//!
//! let gb = Palette::from_hex(&["#020a00", "#4c7f00", "#9bbc0f", "#e5ff8a"]).unwrap();
//! let pipeline = Pipeline::new().scale(4).algorithm_name("Floyd-Steinberg").palette(gb);
//!
//! let source = RgbaImage::filled(64, 48, [120, 140, 160, 255]);
//! let out = pipeline.process(&source).unwrap();
//!
//! assert_eq!(out.width(), 64);
//! assert_eq!(out.height(), 48);
//! ```
//!
//! For one-off calls, [`process`] takes a [`Settings`] value directly, and
//! [`process_with_rng`] makes the random families reproducible:
//!
//! ```
//! use lofi_dither::{process_with_rng, RgbaImage, Settings};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let settings = Settings::new().scale(2).algorithm_name("White Noise");
//! let source = RgbaImage::filled(16, 16, [128, 128, 128, 255]);
//!
//! let a = process_with_rng(&source, &settings, &mut StdRng::seed_from_u64(7)).unwrap();
//! let b = process_with_rng(&source, &settings, &mut StdRng::seed_from_u64(7)).unwrap();
//! assert_eq!(a, b);
//! ```
//!
//! # Pipeline Overview
//!
//! ```text
//! RgbaImage (W x H)
//!     |
//!     v
//! resample            point-sample every s-th pixel, Rec. 601 luma
//!     |
//!     v
//! LumaBuffer (w x h)  w = max(1, W / s), h = max(1, H / s)
//!     |
//!     v
//! ToneCurve           threshold bias, contrast, midtones/highlights, invert
//!     |
//!     v
//! dither              one of five families, L = palette.len() levels
//!     |
//!     v
//! apply_depth         optional leftward smear of dark cells
//!     |
//!     v
//! Palette::colorize   piecewise-linear gradient across the stops
//!     |
//!     v
//! compose             nearest-neighbour back to W x H, alpha 255
//! ```
//!
//! Every stage is public and usable on its own. All buffers live for one
//! call; nothing is cached between frames.
//!
//! # Dithering Algorithms
//!
//! [`DitherAlgorithm`] is a closed enum over five families:
//!
//! - Error diffusion: Floyd-Steinberg, Atkinson (default), Jarvis-Judice-Ninke,
//!   Stucki, Burkes, the Sierra family and Ostromoukhov
//! - Ordered: Bayer 2x2 to 16x16, a clustered Knoll matrix, line screens
//! - Organic: hash-based blue noise, white noise, stippling
//! - Modulation: sine and square waves along x, y or radially, and a
//!   serpentine Riemersma scan
//! - Pattern: checkerboard, grid, random dots, interleaved gradient and the
//!   "Retro / FX" glitch offsets
//!
//! Algorithms parse from their display name or a kebab-case slug:
//!
//! ```
//! use lofi_dither::DitherAlgorithm;
//!
//! let a: DitherAlgorithm = "Knoll (Clustered)".parse().unwrap();
//! let b: DitherAlgorithm = "knoll-clustered".parse().unwrap();
//! assert_eq!(a, b);
//! assert!("Sobel".parse::<DitherAlgorithm>().is_err());
//! assert_eq!(DitherAlgorithm::from_name_lossy("Sobel"), DitherAlgorithm::Identity);
//! ```
//!
//! # Clamping
//!
//! Settings are clamped rather than rejected: a scale or period of 0 acts
//! as 1, percentages are pinned to `0..=100`, a palette with fewer than two
//! stops is padded, and unknown algorithm names fall back to
//! [`DitherAlgorithm::Identity`]. The only errors are structural, see
//! [`PipelineError`].

pub mod api;
pub mod color;
pub mod dither;
pub mod luma;
pub mod output;
pub mod palette;
pub mod preprocess;

#[cfg(test)]
mod domain_tests;

pub use api::{process, process_with_rng, Pipeline, PipelineError, Settings, UnknownAlgorithm};
pub use color::Rgb;
pub use dither::{dither, Dither, DitherAlgorithm, DitherOptions, Family, Quantizer};
pub use luma::LumaBuffer;
pub use output::{apply_depth, compose, ColorCells, RgbaImage};
pub use palette::{Palette, ParseColorError};
pub use preprocess::{resample, ToneCurve, ToneOptions};
