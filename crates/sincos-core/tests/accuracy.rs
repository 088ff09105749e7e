//! Accuracy tests against libm over dense grids.
//!
//! The grids mirror the comparison driver: `2·N + 1` points spread over
//! ±4 turns (f64) or ±16 turns (f32), with N = 1024·1024.

use core::f64::consts::{FRAC_PI_4, TAU};
use sincos_core::{absolute, cos_fast, reduce, sin_fast, sincos_fast};

const HALF_SAMPLES: i32 = 1024 * 1024;

fn max_error_f64(fast: impl Fn(f64) -> f64, reference: impl Fn(f64) -> f64) -> (f64, f64) {
    let mut worst = (0.0, 0.0);
    for i in -HALF_SAMPLES..=HALF_SAMPLES {
        let x = TAU * 4.0 / f64::from(HALF_SAMPLES) * f64::from(i);
        let e = absolute(fast(x) - reference(x));
        if e > worst.0 {
            worst = (e, x);
        }
    }
    worst
}

#[test]
fn sin_f64_error_bound() {
    let (err, at) = max_error_f64(sin_fast::<f64>, libm::sin);
    assert!(err < 1e-9, "sin max error {err:e} at x = {at}");
}

#[test]
fn cos_f64_error_bound() {
    let (err, at) = max_error_f64(cos_fast::<f64>, libm::cos);
    assert!(err < 1e-9, "cos max error {err:e} at x = {at}");
}

#[test]
fn sincos_f64_error_bound() {
    let (err_s, at_s) = max_error_f64(|x| sincos_fast(x).0, libm::sin);
    let (err_c, at_c) = max_error_f64(|x| sincos_fast(x).1, libm::cos);
    assert!(err_s < 1e-9, "sincos sin max error {err_s:e} at x = {at_s}");
    assert!(err_c < 1e-9, "sincos cos max error {err_c:e} at x = {at_c}");
}

#[test]
fn f32_error_bound() {
    let step = core::f32::consts::TAU * 16.0 / HALF_SAMPLES as f32;
    let mut max_err: f64 = 0.0;
    for i in (-HALF_SAMPLES..=HALF_SAMPLES).step_by(7) {
        let x = step * i as f32;
        let (s, c) = sincos_fast(x);
        for e in [
            sin_fast(x) - libm::sinf(x),
            cos_fast(x) - libm::cosf(x),
            s - libm::sinf(x),
            c - libm::cosf(x),
        ] {
            max_err = max_err.max(f64::from(absolute(e)));
        }
    }
    assert!(max_err < 1e-6, "f32 max error {max_err:e}");
}

/// Sample densely on both sides of every octant seam over several turns.
/// A wrong series or sign at a seam shows up as a jump of order 1.
#[test]
fn continuous_across_octant_boundaries() {
    const EPS: f64 = 1e-9;
    for k in -32..=32 {
        let seam = f64::from(k) * FRAC_PI_4;
        let (below_s, below_c) = sincos_fast(seam - EPS);
        let (above_s, above_c) = sincos_fast(seam + EPS);
        // |d/dx| ≤ 1, so a 2·EPS step moves each output by at most 2·EPS.
        let tol = 2.0 * EPS + 1e-12;
        assert!(
            absolute(above_s - below_s) < tol,
            "sin jumps at {k}·π/4: {below_s} -> {above_s}"
        );
        assert!(
            absolute(above_c - below_c) < tol,
            "cos jumps at {k}·π/4: {below_c} -> {above_c}"
        );
        assert!(absolute(sin_fast(seam - EPS) - sin_fast(seam + EPS)) < tol);
        assert!(absolute(cos_fast(seam - EPS) - cos_fast(seam + EPS)) < tol);
    }
}

/// Exact multiples of π/4 land on a seam between two octants; both outputs
/// still match the reference there.
#[test]
fn exact_octant_seams_match_reference() {
    for k in -64..=64 {
        let seam = f64::from(k) * FRAC_PI_4;
        let (s, c) = sincos_fast(seam);
        for (fast, reference, name) in [
            (sin_fast(seam), libm::sin(seam), "sin_fast"),
            (cos_fast(seam), libm::cos(seam), "cos_fast"),
            (s, libm::sin(seam), "sincos_fast sin"),
            (c, libm::cos(seam), "sincos_fast cos"),
        ] {
            let e = absolute(fast - reference);
            assert!(e < 1e-12, "{name} at {k}·π/4: error {e:e}");
        }
    }
}

/// Every octant of several turns, positive and negative, reconstructs the
/// reference values with the right series and signs.
#[test]
fn every_octant_matches_reference() {
    for turn in -3..=3 {
        for k in 0..8 {
            for frac in [0.05, 0.5, 0.95] {
                let base = (f64::from(turn) * 8.0 + f64::from(k) + frac) * FRAC_PI_4;
                let r = reduce(base);
                assert!(
                    absolute(r.sin() - libm::sin(base)) < 1e-12,
                    "sin via octant {} at {base}",
                    r.octant
                );
                assert!(
                    absolute(r.cos() - libm::cos(base)) < 1e-12,
                    "cos via octant {} at {base}",
                    r.octant
                );
                assert_eq!(r.sin().is_sign_positive(), libm::sin(base) > 0.0);
            }
        }
    }
}
