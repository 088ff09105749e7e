//! Public sine/cosine entry points for `f32` and `f64`.
//!
//! | Function | Replaces | Max abs error (f64) | Max abs error (f32) |
//! |----------|----------|---------------------|---------------------|
//! | [`sin_fast`] | `libm::sin` / `libm::sinf` | < 1e-9 for \|x\| ≤ 8π | < 1e-6 |
//! | [`cos_fast`] | `libm::cos` / `libm::cosf` | < 1e-9 for \|x\| ≤ 8π | < 1e-6 |
//! | [`sincos_fast`] | both of the above | same | same |
//!
//! `f32` inputs are widened, reduced and evaluated in f64, then narrowed
//! once. The turn reduction is the precision-sensitive step, and doing it in
//! f64 keeps f32 results within rounding of the true value.
//!
//! Error grows with |x| because the turn fraction is taken in plain f64
//! (see [`reduce`](crate::reduce)). No input is rejected or clamped.

use crate::reduce::reduce;
use core::f64::consts::FRAC_PI_2;

/// Precision dispatch for the fast trig functions.
///
/// Implemented for `f32` and `f64`. Use the free functions [`sin_fast`],
/// [`cos_fast`] and [`sincos_fast`] rather than calling this directly.
pub trait FastTrig: Copy {
    /// Approximate sine.
    fn sin_fast(self) -> Self;
    /// Approximate cosine, computed as `sin(x + π/2)`.
    fn cos_fast(self) -> Self;
    /// Approximate `(sin, cos)` from one range reduction.
    fn sincos_fast(self) -> (Self, Self);
}

impl FastTrig for f64 {
    #[inline]
    fn sin_fast(self) -> f64 {
        reduce(self).sin()
    }

    #[inline]
    fn cos_fast(self) -> f64 {
        reduce(self + FRAC_PI_2).sin()
    }

    #[inline]
    fn sincos_fast(self) -> (f64, f64) {
        reduce(self).sincos()
    }
}

impl FastTrig for f32 {
    #[inline]
    fn sin_fast(self) -> f32 {
        f64::from(self).sin_fast() as f32
    }

    #[inline]
    fn cos_fast(self) -> f32 {
        f64::from(self).cos_fast() as f32
    }

    #[inline]
    fn sincos_fast(self) -> (f32, f32) {
        let (s, c) = f64::from(self).sincos_fast();
        (s as f32, c as f32)
    }
}

/// Fast sine over the full real line.
///
/// # Accuracy
///
/// Max absolute error below 1e-9 (f64) for |x| ≤ 8π, growing roughly as
/// `|x|·1e-16` beyond. f32 results are within rounding of `libm::sinf`.
///
/// # Examples
///
/// ```
/// use sincos_core::sin_fast;
///
/// assert_eq!(sin_fast(0.0_f64), 0.0);
/// assert!((sin_fast(core::f64::consts::FRAC_PI_2) - 1.0).abs() < 1e-12);
/// assert!(sin_fast(core::f32::consts::PI).abs() < 1e-6);
/// ```
#[inline]
pub fn sin_fast<T: FastTrig>(x: T) -> T {
    x.sin_fast()
}

/// Fast cosine over the full real line.
///
/// Evaluated as [`sin_fast`] of `x + π/2`, so it shares the sine path and
/// costs one extra addition.
///
/// # Examples
///
/// ```
/// use sincos_core::cos_fast;
///
/// assert!((cos_fast(0.0_f64) - 1.0).abs() < 1e-12);
/// assert!((cos_fast(core::f64::consts::PI) + 1.0).abs() < 1e-12);
/// assert!(cos_fast(core::f32::consts::FRAC_PI_2).abs() < 1e-6);
/// ```
#[inline]
pub fn cos_fast<T: FastTrig>(x: T) -> T {
    x.cos_fast()
}

/// Fast `(sin, cos)` pair.
///
/// Reduces the angle once and evaluates each series once, roughly halving
/// the cost of calling [`sin_fast`] and [`cos_fast`] separately.
///
/// # Examples
///
/// ```
/// use sincos_core::sincos_fast;
///
/// let (s, c) = sincos_fast(3.0 * core::f64::consts::FRAC_PI_2);
/// assert!((s + 1.0).abs() < 1e-12);
/// assert!(c.abs() < 1e-12);
/// ```
#[inline]
pub fn sincos_fast<T: FastTrig>(x: T) -> (T, T) {
    x.sincos_fast()
}
