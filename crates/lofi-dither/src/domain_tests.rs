//! Domain-critical regression tests for lofi-dither.
//!
//! These tests are designed to catch specific classes of bugs, not just
//! confirm happy paths. Each test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::api::{process, process_with_rng, Pipeline, Settings};
    use crate::color::Rgb;
    use crate::dither::{dither, BayerSize, DitherAlgorithm, DitherOptions, Family, Ordered};
    use crate::luma::LumaBuffer;
    use crate::output::{apply_depth, RgbaImage};
    use crate::palette::Palette;
    use crate::preprocess::{luminance, ToneCurve, ToneOptions};
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn gray_image(width: usize, height: usize, v: u8) -> RgbaImage {
        RgbaImage::filled(width, height, [v, v, v, 255])
    }

    /// Diagonal ramp covering the full byte range.
    fn ramp(width: usize, height: usize) -> LumaBuffer {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(((x + y) * 255 / (width + height - 2)) as u8);
            }
        }
        LumaBuffer::new(width, height, data)
    }

    fn ramp_image(width: usize, height: usize) -> RgbaImage {
        let luma = ramp(width, height);
        RgbaImage::from_fn(width, height, |x, y| {
            let v = luma.get(x, y);
            [v, v, v, 255]
        })
    }

    fn gray_rows(image: &RgbaImage) -> Vec<Vec<u8>> {
        (0..image.height())
            .map(|y| (0..image.width()).map(|x| image.pixel(x, y)[0]).collect())
            .collect()
    }

    fn white_fraction(luma: &LumaBuffer) -> f64 {
        luma.as_slice().iter().filter(|&&v| v == 255).count() as f64 / luma.len() as f64
    }

    // ========================================================================
    // GAP 1: Golden Floyd-Steinberg frame
    // ========================================================================

    /// If this breaks, it means: one of the stages between the source bitmap
    /// and the output changed numerically. RGB 128 has Rec. 601 luma 127
    /// (floored), which falls just below the two-level midpoint of 127.5, so
    /// the very first cell is black and Floyd-Steinberg settles into a
    /// perfect checkerboard. Any drift in luminance rounding, kernel weights,
    /// bleed scaling or float accumulation shows up here.
    #[test]
    fn test_golden_floyd_steinberg_mid_gray() {
        let settings = Settings::new()
            .scale(1)
            .algorithm_name("Floyd-Steinberg")
            .palette(Palette::monochrome());
        let out = process(&gray_image(4, 4, 128), &settings).unwrap();

        assert_eq!(
            gray_rows(&out),
            vec![
                vec![0, 255, 0, 255],
                vec![255, 0, 255, 0],
                vec![0, 255, 0, 255],
                vec![255, 0, 255, 0],
            ],
            "REGRESSION: mid-gray Floyd-Steinberg no longer yields the traced checkerboard"
        );
        for px in out.as_raw().chunks_exact(4) {
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
            assert_eq!(px[3], 255);
        }
    }

    /// If this breaks, it means: luma 128 (just above the midpoint) stopped
    /// producing the complementary checkerboard, so the quantizer midpoint
    /// or its rounding moved.
    #[test]
    fn test_golden_floyd_steinberg_just_above_midpoint() {
        let luma = LumaBuffer::filled(4, 4, 128);
        let algorithm: DitherAlgorithm = "floyd-steinberg".parse().unwrap();
        let out = dither(
            &luma,
            &algorithm,
            &DitherOptions::new(),
            &mut StdRng::seed_from_u64(0),
        );
        assert_eq!(
            out.as_slice(),
            &[255, 0, 255, 0, 0, 255, 0, 255, 255, 0, 255, 0, 0, 255, 0, 255],
            "REGRESSION: luma 128 should start white and alternate"
        );
    }

    /// If this breaks, it means: Ostromoukhov picked the wrong coefficient
    /// band or pushed error to the wrong neighbour. At luma 100 the first
    /// cell uses band 1 (6/13/0); the cell it feeds reaches 131.6 and
    /// switches to band 2 (0/7/13), which is what breaks the symmetry
    /// between rows.
    #[test]
    fn test_golden_ostromoukhov() {
        let luma = LumaBuffer::filled(4, 4, 100);
        let out = dither(
            &luma,
            &"Ostromoukhov".parse::<DitherAlgorithm>().unwrap(),
            &DitherOptions::new(),
            &mut StdRng::seed_from_u64(0),
        );
        assert_eq!(
            out.as_slice().chunks(4).collect::<Vec<_>>(),
            vec![
                &[0, 255, 0, 255][..],
                &[0, 255, 0, 0][..],
                &[0, 0, 255, 0][..],
                &[0, 0, 255, 0][..],
            ],
            "REGRESSION: Ostromoukhov at luma 100 drifted from the traced grid"
        );
    }

    /// If this breaks, it means: the Riemersma scan stopped reversing on odd
    /// rows or the carried error is no longer damped by period / 20. Period
    /// 10 gives damping 0.5; row 1 is visited right to left, so its single
    /// white cell lands at x = 2 with the error carried from x = 4.
    #[test]
    fn test_golden_riemersma_snake() {
        let luma = LumaBuffer::filled(5, 3, 100);
        let out = dither(
            &luma,
            &"Riemersma (Snake Scan)".parse::<DitherAlgorithm>().unwrap(),
            &DitherOptions::new().period(10),
            &mut StdRng::seed_from_u64(0),
        );
        assert_eq!(
            out.as_slice().chunks(5).collect::<Vec<_>>(),
            vec![
                &[0, 255, 0, 0, 255][..],
                &[0, 0, 255, 0, 0][..],
                &[255, 0, 0, 255, 0][..],
            ],
            "REGRESSION: Riemersma at luma 100, period 10 drifted from the traced grid"
        );

        // Period 4 damps to 0.2: the carry never lifts 100 past the midpoint
        let damped = dither(
            &luma,
            &"Riemersma (Snake Scan)".parse::<DitherAlgorithm>().unwrap(),
            &DitherOptions::new().period(4),
            &mut StdRng::seed_from_u64(0),
        );
        assert!(
            damped.as_slice().iter().all(|&v| v == 0),
            "REGRESSION: heavy damping should leave luma 100 all dark"
        );
    }

    // ========================================================================
    // GAP 2: Every output is one of L evenly spaced levels
    // ========================================================================

    /// If this breaks, it means: some algorithm writes a value that is not
    /// one of the palette's L tones. The palette mapper would then blend
    /// between stops and the flat-tone look is lost.
    #[test]
    fn test_every_algorithm_emits_only_levels() {
        let luma = ramp(24, 20);
        for levels in 2..=16 {
            let options = DitherOptions::new().levels(levels);
            let allowed = options.quantizer().level_bytes();
            assert_eq!(allowed.len(), levels);

            for algorithm in DitherAlgorithm::all() {
                let mut rng = StdRng::seed_from_u64(levels as u64);
                let out = dither(&luma, &algorithm, &options, &mut rng);
                assert_eq!((out.width(), out.height()), (24, 20));
                for &v in out.as_slice() {
                    assert!(
                        allowed.contains(&v),
                        "REGRESSION: {algorithm} at L={levels} emitted {v}, not in {allowed:?}"
                    );
                }
            }
        }
    }

    /// If this breaks, it means: level spacing drifted from k/(L-1)*255.
    #[test]
    fn test_seven_level_tones() {
        let options = DitherOptions::new().levels(7);
        assert_eq!(
            options.quantizer().level_bytes(),
            vec![0, 42, 85, 128, 170, 212, 255]
        );
    }

    // ========================================================================
    // GAP 3: Determinism of the non-random families
    // ========================================================================

    /// If this breaks, it means: an algorithm that should be a pure function
    /// of its input started consuming randomness, so frames of a still scene
    /// would shimmer.
    #[test]
    fn test_non_random_algorithms_ignore_the_seed() {
        let source = ramp_image(32, 24);
        for algorithm in DitherAlgorithm::all().filter(|a| !a.is_random()) {
            let settings = Settings::new().scale(2).algorithm(algorithm).depth(1);
            let a = process_with_rng(&source, &settings, &mut StdRng::seed_from_u64(1)).unwrap();
            let b = process_with_rng(&source, &settings, &mut StdRng::seed_from_u64(99)).unwrap();
            assert_eq!(a, b, "REGRESSION: {algorithm} depends on the generator");
        }
    }

    /// If this breaks, it means: the random families are not reproducible
    /// from a seed, so tests and batch renders cannot be replayed.
    #[test]
    fn test_random_algorithms_repeat_per_seed() {
        let source = ramp_image(32, 24);
        for algorithm in DitherAlgorithm::all().filter(|a| a.is_random()) {
            let pipeline = Pipeline::new().scale(1).algorithm(algorithm);
            let a = pipeline
                .process_with_rng(&source, &mut StdRng::seed_from_u64(5))
                .unwrap();
            let b = pipeline
                .process_with_rng(&source, &mut StdRng::seed_from_u64(5))
                .unwrap();
            assert_eq!(a, b, "REGRESSION: {algorithm} is not reproducible");
        }
    }

    /// If this breaks, it means: a family flagged as random stopped drawing
    /// from the generator, or is drawing from a different one.
    #[test]
    fn test_random_algorithms_vary_with_seed() {
        let luma = LumaBuffer::filled(32, 32, 128);
        let options = DitherOptions::new();
        for name in ["White Noise", "Stipple Pattern", "Random Dots", "Noise Field"] {
            let algorithm: DitherAlgorithm = name.parse().unwrap();
            let a = dither(&luma, &algorithm, &options, &mut StdRng::seed_from_u64(1));
            let b = dither(&luma, &algorithm, &options, &mut StdRng::seed_from_u64(2));
            assert_ne!(a, b, "REGRESSION: {name} ignores its seed");
        }
    }

    /// If this breaks, it means: the noise added by a random family is no
    /// longer centred, so mid-gray drifts light or dark on average.
    #[test]
    fn test_random_algorithms_keep_mid_gray_balanced() {
        let luma = LumaBuffer::filled(64, 64, 128);
        let options = DitherOptions::new();
        for algorithm in DitherAlgorithm::all().filter(|a| a.is_random()) {
            let out = dither(&luma, &algorithm, &options, &mut StdRng::seed_from_u64(2024));
            let white = white_fraction(&out);
            assert!(
                (white - 0.5).abs() < 0.08,
                "REGRESSION: {algorithm} turned mid-gray {white:.3} white"
            );
        }
    }

    // ========================================================================
    // GAP 4: Neutral tone curve
    // ========================================================================

    /// If this breaks, it means: default tone settings alter the image.
    /// Contrast 45 must skip the contrast stage entirely and midtones and
    /// highlights at 50 must be exact identities.
    #[test]
    fn test_neutral_tone_curve_is_identity() {
        let curve = ToneCurve::new(&ToneOptions::default());
        for v in 0..=255u8 {
            assert_eq!(curve.lookup(v), v, "REGRESSION: neutral curve moved {v}");
        }
        assert!(curve.is_identity());
    }

    /// If this breaks, it means: the Identity algorithm no longer passes the
    /// tone-shaped luminance straight through to the palette. Floored
    /// Rec. 601 luma of a gray pixel can be one below the input, so compare
    /// against `luminance` rather than the source bytes.
    #[test]
    fn test_identity_pipeline_on_monochrome_passes_luma_through() {
        let source = ramp_image(16, 8);
        let settings = Settings::new().scale(1).algorithm(DitherAlgorithm::Identity);
        let out = process(&source, &settings).unwrap();
        for y in 0..8 {
            for x in 0..16 {
                let [r, g, b, _] = source.pixel(x, y);
                let v = luminance(r, g, b);
                assert_eq!(
                    out.pixel(x, y),
                    [v, v, v, 255],
                    "REGRESSION: identity path altered ({x}, {y})"
                );
            }
        }
    }

    // ========================================================================
    // GAP 5: Palette endpoints
    // ========================================================================

    /// If this breaks, it means: interpolation overshoots or undershoots at
    /// the ends, so pure black and white no longer land on the first and
    /// last stops.
    #[test]
    fn test_palette_endpoints_are_exact() {
        let palettes = [
            Palette::from_hex(&["#020a00", "#4c7f00", "#9bbc0f", "#e5ff8a"]).unwrap(),
            Palette::from_hex(&["#ff9a3c", "#ff4b6c", "#4a36ff"]).unwrap(),
            Palette::from_hex(&["#ffffff", "#000000"]).unwrap(),
            Palette::new(&[Rgb::new(10, 20, 30)]),
        ];
        for palette in palettes {
            let settings = Settings::new().scale(3).palette(palette.clone());
            let black = process(&gray_image(9, 6, 0), &settings).unwrap();
            let white = process(&gray_image(9, 6, 255), &settings).unwrap();
            let first = palette.first().to_rgba();
            let last = palette.last().to_rgba();
            assert!(
                black.as_raw().chunks_exact(4).all(|px| px == first),
                "REGRESSION: black did not map to {}",
                palette.first()
            );
            assert!(
                white.as_raw().chunks_exact(4).all(|px| px == last),
                "REGRESSION: white did not map to {}",
                palette.last()
            );
        }
    }

    // ========================================================================
    // GAP 6: Error diffusion conserves average tone
    // ========================================================================

    /// If this breaks, it means: error is being lost or double-counted. At
    /// bleed 50 Floyd-Steinberg hands on exactly its full error, so away
    /// from the edges (where shares are dropped) a flat field keeps its mean.
    #[test]
    fn test_floyd_steinberg_conserves_interior_mean() {
        let algorithm: DitherAlgorithm = "Floyd-Steinberg".parse().unwrap();
        for levels in [2, 4] {
            let options = DitherOptions::new().levels(levels).bleed(50.0);
            for tone in [32u8, 64, 100, 127, 160, 200, 230] {
                let luma = LumaBuffer::filled(32, 32, tone);
                let out = dither(&luma, &algorithm, &options, &mut StdRng::seed_from_u64(0));
                let interior: Vec<f64> = (4..28)
                    .flat_map(|y| (4..28).map(move |x| (x, y)))
                    .map(|(x, y)| f64::from(out.get(x, y)))
                    .collect();
                let mean = interior.iter().sum::<f64>() / interior.len() as f64;
                assert!(
                    (mean - f64::from(tone)).abs() < 4.0,
                    "REGRESSION: tone {tone} at L={levels} came out with interior mean {mean:.2}"
                );
            }
        }
    }

    // ========================================================================
    // GAP 7: Depth echo
    // ========================================================================

    /// If this breaks, it means: depth 0 is no longer a no-op.
    #[test]
    fn test_depth_zero_is_noop() {
        let luma = ramp(17, 9);
        assert_eq!(apply_depth(&luma, 0), luma);

        let source = ramp_image(20, 12);
        let plain = Settings::new().scale(2).algorithm_name("Bayer 4x4");
        let a = process(&source, &plain).unwrap();
        let b = process(&source, &plain.clone().depth(0)).unwrap();
        assert_eq!(a, b);
    }

    /// If this breaks, it means: the echo runs the wrong way or echoes
    /// itself. A dark right half must grow leftwards by exactly `depth`
    /// cells and no further.
    #[test]
    fn test_depth_pushes_dark_edge_left() {
        let source = RgbaImage::from_fn(16, 4, |x, _| if x < 8 { [255; 4] } else { [0, 0, 0, 255] });
        let settings = Settings::new().scale(1).depth(3);
        let out = process(&source, &settings).unwrap();
        for row in gray_rows(&out) {
            assert_eq!(
                row,
                vec![255, 255, 255, 255, 255, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
                "REGRESSION: dark edge should sit at x = 5"
            );
        }
    }

    // ========================================================================
    // GAP 8: Ordered matrices preserve a pure checkerboard
    // ========================================================================

    /// If this breaks, it means: an ordered matrix or line screen jitters
    /// by more than half the tone range, flipping pure black or white.
    #[test]
    fn test_checkerboard_survives_every_ordered_algorithm() {
        let source = RgbaImage::new(
            2,
            2,
            vec![0, 0, 0, 255, 255, 255, 255, 255, 255, 255, 255, 255, 0, 0, 0, 255],
        )
        .unwrap();
        let ordered: Vec<_> = DitherAlgorithm::all()
            .filter(|a| a.family() == Some(Family::Ordered))
            .collect();
        assert_eq!(ordered.len(), 8);
        assert!(ordered.contains(&DitherAlgorithm::Ordered(Ordered::Bayer(BayerSize::Sixteen))));

        for algorithm in ordered {
            let settings = Settings::new()
                .scale(1)
                .algorithm(algorithm)
                .palette(Palette::monochrome());
            let out = process(&source, &settings).unwrap();
            assert_eq!(out, source, "REGRESSION: {algorithm} altered a pure checkerboard");
        }
    }

    // ========================================================================
    // GAP 9: Clamping instead of failing
    // ========================================================================

    /// If this breaks, it means: degenerate settings started panicking or
    /// erroring instead of being clamped.
    #[test]
    fn test_degenerate_settings_still_render() {
        let source = ramp_image(3, 2);
        let settings = Settings::new()
            .scale(0)
            .period(0)
            .bleed(f64::INFINITY)
            .contrast(-5.0)
            .midtones(f64::NAN)
            .highlights(1e9)
            .depth(u32::MAX)
            .palette(Palette::new(&[]));
        for algorithm in DitherAlgorithm::all() {
            let out = process(&source, &settings.clone().algorithm(algorithm)).unwrap();
            assert_eq!((out.width(), out.height()), (3, 2), "{algorithm}");
        }

        // Scale larger than the image collapses to a single cell.
        let single = process(&source, &Settings::new().scale(64)).unwrap();
        let first = single.pixel(0, 0);
        assert!(single.as_raw().chunks_exact(4).all(|px| px == first));
    }
}
