//! Error types for the lofi-dither public API.
//!
//! The pipeline clamps out-of-range settings instead of rejecting them, so
//! the only hard failures are structurally invalid bitmaps.

use thiserror::Error;

/// Failure of a pipeline call or of [`RgbaImage`](crate::RgbaImage)
/// construction.
///
/// # Example
///
/// ```
/// use lofi_dither::{process, PipelineError, RgbaImage, Settings};
///
/// let empty = RgbaImage::new(0, 3, Vec::new()).unwrap();
/// let err = process(&empty, &Settings::default()).unwrap_err();
/// assert_eq!(err, PipelineError::EmptyImage { width: 0, height: 3 });
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// Source has zero width or zero height.
    #[error("image is empty ({width}x{height})")]
    EmptyImage { width: usize, height: usize },

    /// RGBA buffer length does not match `width * height * 4`.
    #[error("RGBA buffer for {width}x{height} must be {expected} bytes, got {actual}")]
    BufferSize {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
}

/// Strict algorithm lookup found no match.
///
/// Returned by `str::parse::<DitherAlgorithm>()`. The pipeline itself never
/// sees this: [`DitherAlgorithm::from_name_lossy`](crate::DitherAlgorithm::from_name_lossy)
/// maps unknown names to `Identity`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dither algorithm: {name}")]
pub struct UnknownAlgorithm {
    pub name: String,
}
