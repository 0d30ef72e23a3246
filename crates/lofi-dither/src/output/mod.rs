//! Output stages of the pipeline.
//!
//! After dithering, [`apply_depth`] optionally smears dark cells, the palette
//! mapper turns cells into [`ColorCells`], and [`compose`] expands those back
//! into a full-size [`RgbaImage`].

mod compose;
mod depth;
mod image;

pub use compose::{compose, ColorCells};
pub use depth::apply_depth;
pub use image::RgbaImage;
