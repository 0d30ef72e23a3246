//! Error diffusion kernel tables.
//!
//! Each kernel lists the forward neighbours that receive a share of the
//! quantization error. Offsets are relative to the current cell in a
//! left-to-right, top-to-bottom scan; `dy` is never negative and `dy == 0`
//! entries always have `dx > 0`, so error only flows to unvisited cells.

/// An error diffusion kernel.
///
/// Each neighbour `(dx, dy)` receives `error * weight / divisor`. Shares that
/// fall outside the grid are dropped, not redistributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    /// `(dx, dy, weight)` triples.
    pub entries: &'static [(i32, usize, u8)],
    pub divisor: u8,
    /// Deepest row offset; the error window keeps `max_dy + 1` rows.
    pub max_dy: usize,
}

impl Kernel {
    /// Sum of all weights.
    pub fn weight_sum(&self) -> u32 {
        self.entries.iter().map(|&(_, _, w)| u32::from(w)).sum()
    }

    /// Fraction of the error this kernel hands on (1.0 unless lossy).
    pub fn propagation(&self) -> f64 {
        f64::from(self.weight_sum()) / f64::from(self.divisor)
    }
}

/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[(1, 0, 7), (-1, 1, 3), (0, 1, 5), (1, 1, 1)],
    divisor: 16,
    max_dy: 1,
};

/// Bill Atkinson's kernel. Only 6/8 of the error is passed on, which is what
/// gives it the high-contrast, blown-out look.
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
pub const ATKINSON: Kernel = Kernel {
    entries: &[(1, 0, 1), (2, 0, 1), (-1, 1, 1), (0, 1, 1), (1, 1, 1), (0, 2, 1)],
    divisor: 8,
    max_dy: 2,
};

/// ```text
///            X   7   5
///    3   5   7   5   3
///    1   3   5   3   1
/// ```
pub const JARVIS_JUDICE_NINKE: Kernel = Kernel {
    entries: &[
        (1, 0, 7),
        (2, 0, 5),
        (-2, 1, 3),
        (-1, 1, 5),
        (0, 1, 7),
        (1, 1, 5),
        (2, 1, 3),
        (-2, 2, 1),
        (-1, 2, 3),
        (0, 2, 5),
        (1, 2, 3),
        (2, 2, 1),
    ],
    divisor: 48,
    max_dy: 2,
};

/// ```text
///            X   8   4
///    2   4   8   4   2
///    1   2   4   2   1
/// ```
pub const STUCKI: Kernel = Kernel {
    entries: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
        (-2, 2, 1),
        (-1, 2, 2),
        (0, 2, 4),
        (1, 2, 2),
        (2, 2, 1),
    ],
    divisor: 42,
    max_dy: 2,
};

/// Stucki truncated to two rows.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
/// ```
pub const BURKES: Kernel = Kernel {
    entries: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
    ],
    divisor: 32,
    max_dy: 1,
};

/// ```text
///            X   5   3
///    2   4   5   4   2
///        2   3   2
/// ```
pub const SIERRA: Kernel = Kernel {
    entries: &[
        (1, 0, 5),
        (2, 0, 3),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 5),
        (1, 1, 4),
        (2, 1, 2),
        (-1, 2, 2),
        (0, 2, 3),
        (1, 2, 2),
    ],
    divisor: 32,
    max_dy: 2,
};

/// ```text
///            X   4   3
///    1   2   3   2   1
/// ```
pub const SIERRA_TWO_ROW: Kernel = Kernel {
    entries: &[
        (1, 0, 4),
        (2, 0, 3),
        (-2, 1, 1),
        (-1, 1, 2),
        (0, 1, 3),
        (1, 1, 2),
        (2, 1, 1),
    ],
    divisor: 16,
    max_dy: 1,
};

/// ```text
///    X   2
///    1   1
/// ```
pub const SIERRA_LITE: Kernel = Kernel {
    entries: &[(1, 0, 2), (-1, 1, 1), (0, 1, 1)],
    divisor: 4,
    max_dy: 1,
};

/// Ostromoukhov-style variable coefficients `(right, down-left, down)`,
/// selected by which quarter of the tone range the input falls in.
pub const OSTROMOUKHOV_BANDS: [[u8; 3]; 4] = [[13, 0, 5], [6, 13, 0], [0, 7, 13], [3, 5, 13]];

/// Coefficients for a working value in `0.0..=255.0` (values outside the
/// range saturate to the first or last band).
#[inline]
pub fn ostromoukhov_coefficients(value: f64) -> [u8; 3] {
    let v = value / 255.0;
    let band = if v < 0.25 {
        0
    } else if v < 0.5 {
        1
    } else if v < 0.75 {
        2
    } else {
        3
    };
    OSTROMOUKHOV_BANDS[band]
}
