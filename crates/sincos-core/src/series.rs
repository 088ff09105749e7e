//! Polynomial evaluation of the two reduced-angle series.
//!
//! Both functions assume the argument comes out of [`reduce`](crate::reduce),
//! i.e. |x| ≤ π/4. Nothing is checked: a larger argument only costs
//! accuracy.
//!
//! With the `fma` feature every Horner step is a single fused multiply-add.
//! Results then differ from the default path in the last bit or two, never
//! in sign or branch.

use crate::coeffs::{COS_COEFFS, SIN_COEFFS};

/// One Horner step: `acc * x2 + c`.
#[cfg(not(feature = "fma"))]
#[inline(always)]
fn step(acc: f64, x2: f64, c: f64) -> f64 {
    c + acc * x2
}

#[cfg(feature = "fma")]
#[inline(always)]
fn step(acc: f64, x2: f64, c: f64) -> f64 {
    libm::fma(acc, x2, c)
}

#[inline(always)]
fn horner(coeffs: &[f64; 6], x2: f64) -> f64 {
    let mut acc = coeffs[5];
    acc = step(acc, x2, coeffs[4]);
    acc = step(acc, x2, coeffs[3]);
    acc = step(acc, x2, coeffs[2]);
    acc = step(acc, x2, coeffs[1]);
    step(acc, x2, coeffs[0])
}

/// Cosine series from the squared reduced angle.
///
/// Returns `1 + x²·P(x²)` where `P` uses [`COS_COEFFS`].
///
/// # Examples
///
/// ```
/// use sincos_core::series::cos_series;
///
/// assert_eq!(cos_series(0.0), 1.0);
/// let x = core::f64::consts::FRAC_PI_4;
/// assert!((cos_series(x * x) - libm::cos(x)).abs() < 1e-12);
/// ```
#[inline]
pub fn cos_series(x2: f64) -> f64 {
    1.0 + x2 * horner(&COS_COEFFS, x2)
}

/// Sine series from the reduced angle and its square.
///
/// Returns `x + x²·x·P(x²)` where `P` uses [`SIN_COEFFS`]. Taking `x2`
/// separately lets [`sincos_fast`](crate::sincos_fast) square once for
/// both series.
///
/// # Examples
///
/// ```
/// use sincos_core::series::sin_series;
///
/// assert_eq!(sin_series(0.0, 0.0), 0.0);
/// let x = -core::f64::consts::FRAC_PI_4;
/// assert!((sin_series(x, x * x) - libm::sin(x)).abs() < 1e-12);
/// ```
#[inline]
pub fn sin_series(x: f64, x2: f64) -> f64 {
    x + x2 * x * horner(&SIN_COEFFS, x2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::FRAC_PI_4;

    #[test]
    fn cos_series_matches_libm_on_reduction_interval() {
        let mut max_err: f64 = 0.0;
        for i in -1000..=1000 {
            let x = FRAC_PI_4 * f64::from(i) / 1000.0;
            let err = (cos_series(x * x) - libm::cos(x)).abs();
            max_err = max_err.max(err);
        }
        assert!(max_err < 1e-12, "max cos series error {max_err:e}");
    }

    #[test]
    fn sin_series_matches_libm_on_reduction_interval() {
        let mut max_err: f64 = 0.0;
        for i in -1000..=1000 {
            let x = FRAC_PI_4 * f64::from(i) / 1000.0;
            let err = (sin_series(x, x * x) - libm::sin(x)).abs();
            max_err = max_err.max(err);
        }
        assert!(max_err < 1e-13, "max sin series error {max_err:e}");
    }

    #[test]
    fn sin_series_is_odd() {
        for i in 1..100 {
            let x = f64::from(i) * 0.007;
            assert_eq!(sin_series(-x, x * x), -sin_series(x, x * x));
        }
    }

    #[test]
    fn origin_is_exact() {
        assert_eq!(cos_series(0.0), 1.0);
        assert_eq!(sin_series(0.0, 0.0), 0.0);
    }
}
