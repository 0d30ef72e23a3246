//! Color types.
//!
//! The pipeline works on single-channel luminance until the palette mapper
//! turns each cell back into an [`Rgb`] color.

mod rgb;

pub use rgb::Rgb;
