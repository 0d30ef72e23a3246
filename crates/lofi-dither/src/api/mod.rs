//! Public API for the lofi-dither crate.
//!
//! This module provides the high-level API: the [`Pipeline`] builder, the
//! [`Settings`] value it wraps, the one-shot [`process`] functions, and the
//! crate's error types.

mod builder;
mod error;
mod settings;

pub use builder::{process, process_with_rng, Pipeline};
pub use error::{PipelineError, UnknownAlgorithm};
pub use settings::Settings;
