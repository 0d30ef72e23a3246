//! lofi - low-bit-depth dithering for images and frame sequences
//!
//! Command-line front end for the `lofi-dither` pipeline: PNG in, PNG out,
//! with config-driven defaults and palette presets.
//! This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
