//! Error diffusion dithering.
//!
//! Cells are visited left to right, top to bottom. Each cell is snapped to
//! the nearest tone and the difference is pushed forward onto unvisited
//! neighbours according to a [`Kernel`], so the local average tone survives
//! quantization.

use super::kernel::{
    ostromoukhov_coefficients, Kernel, ATKINSON, BURKES, FLOYD_STEINBERG, JARVIS_JUDICE_NINKE,
    SIERRA, SIERRA_LITE, SIERRA_TWO_ROW, STUCKI,
};
use super::{Dither, DitherOptions};
use crate::luma::{to_byte, LumaBuffer};
use rand::RngCore;

/// Error diffusion variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diffusion {
    FloydSteinberg,
    Atkinson,
    JarvisJudiceNinke,
    Stucki,
    Burkes,
    Sierra,
    TwoRowSierra,
    SierraLite,
    /// Tone-dependent three-neighbour coefficients, no bleed scaling.
    Ostromoukhov,
}

impl Diffusion {
    /// Fixed kernel, or `None` for the variable-coefficient Ostromoukhov.
    pub fn kernel(&self) -> Option<&'static Kernel> {
        match self {
            Diffusion::FloydSteinberg => Some(&FLOYD_STEINBERG),
            Diffusion::Atkinson => Some(&ATKINSON),
            Diffusion::JarvisJudiceNinke => Some(&JARVIS_JUDICE_NINKE),
            Diffusion::Stucki => Some(&STUCKI),
            Diffusion::Burkes => Some(&BURKES),
            Diffusion::Sierra => Some(&SIERRA),
            Diffusion::TwoRowSierra => Some(&SIERRA_TWO_ROW),
            Diffusion::SierraLite => Some(&SIERRA_LITE),
            Diffusion::Ostromoukhov => None,
        }
    }
}

impl Dither for Diffusion {
    fn dither(&self, luma: &LumaBuffer, options: &DitherOptions, _rng: &mut dyn RngCore) -> LumaBuffer {
        match self.kernel() {
            Some(kernel) => diffuse_with_kernel(luma, kernel, options),
            None => diffuse_ostromoukhov(luma, options),
        }
    }
}

/// Sliding window of working values for the rows a kernel can reach.
///
/// Only `max_dy + 1` rows are held at a time. Rows enter the window seeded
/// with their source luminance and accumulate error as single-precision
/// floats until they become the current row.
#[derive(Debug)]
pub struct DiffusionWindow<'a> {
    /// rows[0] is the current row, rows[1] the next, and so on.
    rows: Vec<Vec<f32>>,
    source: &'a LumaBuffer,
    /// Index of the source row held in rows[0].
    current: usize,
}

impl<'a> DiffusionWindow<'a> {
    pub fn new(source: &'a LumaBuffer, row_depth: usize) -> Self {
        let rows = (0..row_depth.max(1))
            .map(|dy| Self::load_row(source, dy))
            .collect();
        Self {
            rows,
            source,
            current: 0,
        }
    }

    fn load_row(source: &LumaBuffer, y: usize) -> Vec<f32> {
        if y < source.height() {
            let start = y * source.width();
            source.as_slice()[start..start + source.width()]
                .iter()
                .map(|&v| f32::from(v))
                .collect()
        } else {
            vec![0.0; source.width()]
        }
    }

    /// Working value (source plus received error) at `x` in the current row.
    #[inline]
    pub fn value(&self, x: usize) -> f64 {
        f64::from(self.rows[0][x])
    }

    /// Add `share` to the cell `row_offset` rows below the current one.
    ///
    /// Targets outside the window are ignored.
    #[inline]
    pub fn add_error(&mut self, x: usize, row_offset: usize, share: f64) {
        if let Some(cell) = self.rows.get_mut(row_offset).and_then(|row| row.get_mut(x)) {
            *cell = (f64::from(*cell) + share) as f32;
        }
    }

    /// Drop the current row and pull the next source row in at the bottom.
    pub fn advance_row(&mut self) {
        self.current += 1;
        self.rows.rotate_left(1);
        let incoming = self.current + self.rows.len() - 1;
        let fresh = Self::load_row(self.source, incoming);
        if let Some(last) = self.rows.last_mut() {
            *last = fresh;
        }
    }
}

/// Diffuse quantization error through a fixed kernel.
///
/// Error is scaled by [`DitherOptions::bleed_factor`] before being split.
/// Shares aimed outside the grid are dropped without renormalizing the rest.
pub fn diffuse_with_kernel(luma: &LumaBuffer, kernel: &Kernel, options: &DitherOptions) -> LumaBuffer {
    let (width, height) = (luma.width(), luma.height());
    let quantizer = options.quantizer();
    let factor = options.bleed_factor();
    let divisor = f64::from(kernel.divisor);

    let mut window = DiffusionWindow::new(luma, kernel.max_dy + 1);
    let mut out = Vec::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let old = window.value(x);
            let new = quantizer.quantize(old);
            out.push(to_byte(new));

            let error = (old - new) * factor;
            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i64 + i64::from(dx);
                if nx < 0 || nx as usize >= width || y + dy >= height {
                    continue;
                }
                window.add_error(nx as usize, dy, error * f64::from(weight) / divisor);
            }
        }
        window.advance_row();
    }

    LumaBuffer::new(width, height, out)
}

/// Variable-coefficient diffusion.
///
/// The three coefficients are chosen from the working value (source plus
/// received error) before quantization. The full unscaled error is split
/// between right, down-left and down.
pub fn diffuse_ostromoukhov(luma: &LumaBuffer, options: &DitherOptions) -> LumaBuffer {
    let (width, height) = (luma.width(), luma.height());
    let quantizer = options.quantizer();

    let mut window = DiffusionWindow::new(luma, 2);
    let mut out = Vec::with_capacity(width * height);

    for y in 0..height {
        let has_next_row = y + 1 < height;
        for x in 0..width {
            let old = window.value(x);
            let new = quantizer.quantize(old);
            out.push(to_byte(new));

            let error = old - new;
            let [c1, c2, c3] = ostromoukhov_coefficients(old);
            let sum = f64::from(c1) + f64::from(c2) + f64::from(c3);

            if x + 1 < width {
                window.add_error(x + 1, 0, error * f64::from(c1) / sum);
            }
            if has_next_row && x >= 1 {
                window.add_error(x - 1, 1, error * f64::from(c2) / sum);
            }
            if has_next_row {
                window.add_error(x, 1, error * f64::from(c3) / sum);
            }
        }
        window.advance_row();
    }

    LumaBuffer::new(width, height, out)
}
