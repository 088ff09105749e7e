//! Octant classification and range reduction.
//!
//! A full turn is split into eight octants of π/4. Shifting the octant index
//! by one (`s = ⌊8·frac⌋ + 1`) makes each pair of octants that shares a
//! centre line land on the same half-octant index `s >> 1`:
//!
//! | `s` | turn fraction | centre | `sin(val)` | `cos(val)` |
//! |-----|---------------|--------|------------|------------|
//! | 1 | \[0, 1/8) | 0 | `+sin x` | `+cos x` |
//! | 2, 3 | \[1/8, 3/8) | π/2 | `+cos x` | `−sin x` |
//! | 4, 5 | \[3/8, 5/8) | π | `−sin x` | `−cos x` |
//! | 6, 7 | \[5/8, 7/8) | 3π/2 | `−cos x` | `+sin x` |
//! | 8 | \[7/8, 1) | 2π | `+sin x` | `+cos x` |
//!
//! where `x = val − centre ∈ [−π/4, π/4)`. An even half-octant selects the
//! sine series for the sine output, an odd one the cosine series; the
//! companion output always uses the other series. The sine sign is bit 2 of
//! `s`, the cosine sign is `s ∉ 2..=5`.
//!
//! # Limitations
//!
//! The turn fraction is taken in f64 without extra-precision π, so the
//! absolute error of the reduced angle grows linearly with |val| (about
//! `|val|·1.1e-16`). Inputs are not clamped. Infinite and NaN inputs produce
//! NaN.

use crate::abs::absolute;
use crate::series::{cos_series, sin_series};
use core::f64::consts::{FRAC_1_PI, TAU};

/// 1/(2π).
const INV_TAU: f64 = FRAC_1_PI * 0.5;

/// Which polynomial family reconstructs the sine output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    /// Sine series on the reduced angle.
    Sine,
    /// Cosine series on the reduced angle.
    Cosine,
}

impl Series {
    /// The family used for the companion (cosine) output.
    #[inline]
    pub fn companion(self) -> Self {
        match self {
            Series::Sine => Series::Cosine,
            Series::Cosine => Series::Sine,
        }
    }

    #[inline(always)]
    fn eval(self, x: f64, x2: f64) -> f64 {
        match self {
            Series::Sine => sin_series(x, x2),
            Series::Cosine => cos_series(x2),
        }
    }
}

/// Result of reducing one input angle.
///
/// Produced by [`reduce`]. `sin()`, `cos()` and `sincos()` reconstruct the
/// trig values of the original input from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reduction {
    /// Reduced angle, |x| ≤ π/4 for finite input.
    pub x: f64,
    /// Shifted octant index `s`, in `1..=8`.
    pub octant: u32,
    /// Series family that yields the sine output.
    pub series: Series,
    /// Sign of the sine output (already folded with the input sign).
    pub sin_positive: bool,
    /// Sign of the cosine output.
    pub cos_positive: bool,
}

#[inline(always)]
fn signed(positive: bool, v: f64) -> f64 {
    if positive { v } else { -v }
}

impl Reduction {
    /// Half-octant index `s >> 1`, in `0..=4` (4 behaves like 0).
    #[inline]
    pub fn half_octant(&self) -> u32 {
        self.octant >> 1
    }

    /// Sine of the original input. Evaluates one series.
    #[inline]
    pub fn sin(&self) -> f64 {
        let x2 = self.x * self.x;
        signed(self.sin_positive, self.series.eval(self.x, x2))
    }

    /// Cosine of the original input. Evaluates one series.
    #[inline]
    pub fn cos(&self) -> f64 {
        let x2 = self.x * self.x;
        signed(self.cos_positive, self.series.companion().eval(self.x, x2))
    }

    /// `(sin, cos)` of the original input, each series evaluated once.
    #[inline]
    pub fn sincos(&self) -> (f64, f64) {
        let x = self.x;
        let x2 = x * x;
        let s = sin_series(x, x2);
        let c = cos_series(x2);
        let (for_sin, for_cos) = match self.series {
            Series::Sine => (s, c),
            Series::Cosine => (c, s),
        };
        (
            signed(self.sin_positive, for_sin),
            signed(self.cos_positive, for_cos),
        )
    }
}

/// Fold `val` into a reduced angle and classify its octant.
///
/// # Examples
///
/// ```
/// use sincos_core::{Series, reduce};
///
/// // 5π/8 lies in octant 3, centred on π/2, so sin uses the cosine series.
/// let angle = 5.0 * core::f64::consts::PI / 8.0;
/// let r = reduce(angle);
/// assert_eq!(r.octant, 3);
/// assert_eq!(r.series, Series::Cosine);
/// assert!(r.sin_positive);
/// assert!(!r.cos_positive);
/// assert!((r.x - core::f64::consts::PI / 8.0).abs() < 1e-12);
/// assert!((r.sin() - libm::sin(angle)).abs() < 1e-12);
/// ```
#[inline]
pub fn reduce(val: f64) -> Reduction {
    let turns = absolute(val) * INV_TAU;
    let frac = turns - libm::trunc(turns);

    // frac < 1, so 8·frac < 8 and the index stays within 1..=8.
    let octant = (frac * 8.0) as u32 + 1;
    let half = octant >> 1;
    let x = (frac - 0.25 * f64::from(half)) * TAU;

    let series = if half & 1 == 0 {
        Series::Sine
    } else {
        Series::Cosine
    };

    // sin is odd: a negative input flips only the sine sign.
    let sin_positive = ((octant & 0b100) == 0) != (val < 0.0);
    let cos_positive = !(2..=5).contains(&octant);

    Reduction {
        x,
        octant,
        series,
        sin_positive,
        cos_positive,
    }
}
