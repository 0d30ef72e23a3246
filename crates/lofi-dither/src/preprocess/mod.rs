//! Stages that run before dithering.
//!
//! [`resample`] point-samples the source bitmap down to the working grid and
//! extracts luminance; [`ToneCurve`] then reshapes that luminance.

mod resample;
mod tone;

pub use resample::{luminance, resample, working_size};
pub use tone::{ToneCurve, ToneOptions, NEUTRAL_CONTRAST};

pub(crate) use tone::clamp_percent;
