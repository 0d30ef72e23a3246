//! Single-channel working buffer shared by every pipeline stage.
//!
//! A [`LumaBuffer`] holds one byte of luminance per cell at the working
//! (downscaled) resolution. The resampler creates it, the tone shaper
//! rewrites it in place, and each dither family produces a fresh one.

/// Row-major luminance buffer, one byte per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LumaBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl LumaBuffer {
    /// Wrap existing luminance values.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `data.len() == width * height`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(
            data.len(),
            width * height,
            "luma length ({}) must match width * height ({}x{}={})",
            data.len(),
            width,
            height,
            width * height,
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// A buffer of `width * height` cells all set to `value`.
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self::new(width, height, vec![value; width * height])
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at `(x, y)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Build a buffer of the same dimensions by mapping every cell with its
    /// coordinates.
    pub(crate) fn map_cells(&self, mut f: impl FnMut(usize, usize, u8) -> u8) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for y in 0..self.height {
            for x in 0..self.width {
                data.push(f(x, y, self.data[y * self.width + x]));
            }
        }
        Self::new(self.width, self.height, data)
    }
}

/// Clamp to `0..=255` and round half to even.
#[inline]
pub(crate) fn to_byte(value: f64) -> u8 {
    value.clamp(0.0, 255.0).round_ties_even() as u8
}
