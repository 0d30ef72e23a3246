//! Gradient palette: piecewise-linear interpolation across ordered stops.

use std::str::FromStr;

use super::error::ParseColorError;
use crate::color::Rgb;
use crate::luma::{to_byte, LumaBuffer};
use crate::output::ColorCells;

/// An ordered list of color stops that luminance is mapped across.
///
/// Luminance 0 lands exactly on the first stop and 255 exactly on the last;
/// everything in between is linearly interpolated between the two nearest
/// stops. The number of stops also sets the quantizer's level count, so a
/// 4-stop palette yields four flat tones after dithering.
///
/// A palette always has at least two stops. [`Palette::new`] normalizes
/// degenerate input instead of rejecting it:
///
/// - no stops: black then white
/// - one stop: that stop duplicated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    stops: Vec<Rgb>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::monochrome()
    }
}

impl Palette {
    /// Build a palette from ordered stops, normalizing to at least two.
    pub fn new(stops: &[Rgb]) -> Self {
        let stops = match stops {
            [] => vec![Rgb::BLACK, Rgb::WHITE],
            [only] => vec![*only, *only],
            many => many.to_vec(),
        };
        Self { stops }
    }

    /// Black to white.
    pub fn monochrome() -> Self {
        Self::new(&[Rgb::BLACK, Rgb::WHITE])
    }

    /// Parse a palette from hex strings (`#rrggbb`, `#rgb`, with or without `#`).
    ///
    /// ```
    /// use lofi_dither::Palette;
    ///
    /// let gb = Palette::from_hex(&["#020a00", "#4c7f00", "#9bbc0f", "#e5ff8a"]).unwrap();
    /// assert_eq!(gb.len(), 4);
    /// ```
    pub fn from_hex<S: AsRef<str>>(stops: &[S]) -> Result<Self, ParseColorError> {
        let parsed = stops
            .iter()
            .map(|s| Rgb::from_str(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(&parsed))
    }

    /// Number of stops (always >= 2, so there is no `is_empty`).
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    #[inline]
    pub fn stops(&self) -> &[Rgb] {
        &self.stops
    }

    #[inline]
    pub fn first(&self) -> Rgb {
        self.stops[0]
    }

    #[inline]
    pub fn last(&self) -> Rgb {
        self.stops[self.stops.len() - 1]
    }

    /// Map one luminance value onto the gradient.
    pub fn map(&self, luma: u8) -> Rgb {
        let last = self.stops.len() - 1;
        let pos = f64::from(luma) / 255.0 * last as f64;
        let idx = pos.floor() as usize;
        let frac = pos - idx as f64;

        let c1 = self.stops[idx.min(last)];
        let c2 = self.stops[(idx + 1).min(last)];
        let lerp = |a: u8, b: u8| to_byte(f64::from(a) + (f64::from(b) - f64::from(a)) * frac);

        Rgb::new(lerp(c1.r, c2.r), lerp(c1.g, c2.g), lerp(c1.b, c2.b))
    }

    /// Map every cell of a luminance buffer.
    ///
    /// Builds a 256-entry lookup first, so the per-cell cost is one index.
    pub fn colorize(&self, luma: &LumaBuffer) -> ColorCells {
        let lut: Vec<Rgb> = (0..=255u8).map(|g| self.map(g)).collect();
        let colors = luma
            .as_slice()
            .iter()
            .map(|&g| lut[g as usize])
            .collect();
        ColorCells::new(luma.width(), luma.height(), colors)
    }
}
