//! Modulation dithering: periodic threshold surfaces and serpentine scan.

use rand::RngCore;

use super::{Dither, DitherOptions};
use crate::luma::{to_byte, LumaBuffer};

const WAVE_JITTER: f64 = 0.8;

/// Coordinate a wave travels along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    /// Distance from the grid centre `(w / 2, h / 2)`.
    Radial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Waveform {
    Sine,
    Square,
}

/// Modulation variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modulation {
    Wave { axis: Axis, waveform: Waveform },
    /// Serpentine scan carrying a single damped error value.
    Riemersma,
}

impl Dither for Modulation {
    fn dither(&self, luma: &LumaBuffer, options: &DitherOptions, _rng: &mut dyn RngCore) -> LumaBuffer {
        match *self {
            Modulation::Wave { axis, waveform } => wave(luma, axis, waveform, options),
            Modulation::Riemersma => riemersma(luma, options),
        }
    }
}

/// Threshold in `0..=255` for wave coordinate `c` at period `p`.
#[inline]
pub fn wave_threshold(waveform: Waveform, c: f64, p: f64) -> f64 {
    match waveform {
        Waveform::Sine => 127.5 + 127.5 * (c * p / 10.0).sin(),
        Waveform::Square => ((c / p).floor() % 2.0) * 255.0,
    }
}

fn wave(luma: &LumaBuffer, axis: Axis, waveform: Waveform, options: &DitherOptions) -> LumaBuffer {
    let quantizer = options.quantizer();
    let p = options.period_f64();
    let cx = luma.width() as f64 / 2.0;
    let cy = luma.height() as f64 / 2.0;

    luma.map_cells(|x, y, g| {
        let c = match axis {
            Axis::X => x as f64,
            Axis::Y => y as f64,
            Axis::Radial => (x as f64 - cx).hypot(y as f64 - cy),
        };
        let jitter = (wave_threshold(waveform, c, p) - 127.0) * WAVE_JITTER;
        quantizer.quantize_byte(f64::from(g) + jitter)
    })
}

/// Damping applied to the carried error: `clamp(period / 20, 0.1, 0.9)`.
#[inline]
pub fn riemersma_damping(period: u32) -> f64 {
    (f64::from(period) / 20.0).clamp(0.1, 0.9)
}

/// Serpentine scan: even rows left to right, odd rows right to left.
///
/// A single error value follows the snake path and carries over from the
/// end of one row into the start of the next.
fn riemersma(luma: &LumaBuffer, options: &DitherOptions) -> LumaBuffer {
    let (width, height) = (luma.width(), luma.height());
    let quantizer = options.quantizer();
    let damping = riemersma_damping(options.period);

    let src = luma.as_slice();
    let mut out = vec![0u8; src.len()];
    let mut error = 0.0;

    for y in 0..height {
        for step in 0..width {
            let x = if y % 2 == 0 { step } else { width - 1 - step };
            let idx = y * width + x;
            let val = f64::from(src[idx]) + error;
            let level = quantizer.quantize(val);
            out[idx] = to_byte(level);
            error = (val - level) * damping;
        }
    }

    LumaBuffer::new(width, height, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn run(modulation: Modulation, luma: &LumaBuffer, options: &DitherOptions) -> LumaBuffer {
        modulation.dither(luma, options, &mut StepRng::new(0, 1))
    }

    #[test]
    fn test_sine_threshold_range() {
        assert_eq!(wave_threshold(Waveform::Sine, 0.0, 4.0), 127.5);
        for c in 0..100 {
            let t = wave_threshold(Waveform::Sine, f64::from(c), 3.0);
            assert!((0.0..=255.0).contains(&t));
        }
    }

    #[test]
    fn test_square_threshold_alternates_every_period() {
        let t: Vec<f64> = (0..6)
            .map(|c| wave_threshold(Waveform::Square, f64::from(c), 2.0))
            .collect();
        assert_eq!(t, vec![0.0, 0.0, 255.0, 255.0, 0.0, 0.0]);
    }

    #[test]
    fn test_square_wave_x_stripes() {
        let luma = LumaBuffer::filled(6, 2, 128);
        let options = DitherOptions::new().period(2);
        let wave = Modulation::Wave {
            axis: Axis::X,
            waveform: Waveform::Square,
        };
        let out = run(wave, &luma, &options);
        assert_eq!(out.as_slice(), &[0, 0, 255, 255, 0, 0, 0, 0, 255, 255, 0, 0]);
    }

    #[test]
    fn test_sine_wave_y_is_constant_along_rows() {
        let luma = LumaBuffer::filled(5, 8, 128);
        let wave = Modulation::Wave {
            axis: Axis::Y,
            waveform: Waveform::Sine,
        };
        let out = run(wave, &luma, &DitherOptions::new());
        for y in 0..8 {
            let first = out.get(0, y);
            assert!((0..5).all(|x| out.get(x, y) == first), "row {y}");
        }
    }

    #[test]
    fn test_radial_wave_is_symmetric() {
        let luma = LumaBuffer::filled(8, 8, 100);
        let wave = Modulation::Wave {
            axis: Axis::Radial,
            waveform: Waveform::Sine,
        };
        let out = run(wave, &luma, &DitherOptions::new().levels(4));
        // Centre is (4, 4): (2, 4) and (6, 4) are equidistant.
        assert_eq!(out.get(2, 4), out.get(6, 4));
        assert_eq!(out.get(4, 1), out.get(4, 7));
    }

    #[test]
    fn test_damping_clamps() {
        assert_eq!(riemersma_damping(0), 0.1);
        assert_eq!(riemersma_damping(1), 0.1);
        assert_eq!(riemersma_damping(10), 0.5);
        assert_eq!(riemersma_damping(40), 0.9);
    }

    #[test]
    fn test_riemersma_snakes_and_carries_error() {
        // damping 0.9: 100 -> 0 (e 90), 190 -> 255 (e -58.5), 41.5 -> 0 (e 37.35),
        // then row 1 runs right to left starting at 137.35 -> 255.
        let luma = LumaBuffer::filled(3, 2, 100);
        let out = run(Modulation::Riemersma, &luma, &DitherOptions::new().period(20));
        assert_eq!(out.as_slice(), &[0, 255, 0, 0, 0, 255]);
    }

    #[test]
    fn test_riemersma_low_damping_stays_dark() {
        let luma = LumaBuffer::filled(3, 2, 100);
        let out = run(Modulation::Riemersma, &luma, &DitherOptions::new().period(4));
        assert!(out.as_slice().iter().all(|&v| v == 0));
    }
}
