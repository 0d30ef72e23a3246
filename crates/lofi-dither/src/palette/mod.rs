//! Palette types and utilities
//!
//! This module provides the gradient [`Palette`] used by the palette mapper
//! and the error type for parsing hex color stops.

mod error;
mod palette;

pub use error::ParseColorError;
pub use palette::Palette;
