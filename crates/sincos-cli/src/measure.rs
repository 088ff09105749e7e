//! Timing and error measurement of the fast path against libm.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use sincos_core::{FastTrig, absolute};
use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Function under test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Function {
    /// `sin_fast` vs `sin`
    Sin,
    /// `cos_fast` vs `cos`
    Cos,
    /// `sincos_fast` vs `sincos`, error over both outputs
    Sincos,
}

impl Function {
    /// All functions in report order.
    pub const ALL: [Function; 3] = [Function::Sin, Function::Cos, Function::Sincos];

    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Sincos => "sincos",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Floating-point width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// Single precision
    F32,
    /// Double precision
    F64,
}

impl Precision {
    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Precision::F32 => "f32",
            Precision::F64 => "f64",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A float type with both a fast path and a libm reference.
pub trait Reference: FastTrig + Into<f64> {
    /// Width label for reports.
    const PRECISION: Precision;
    /// libm sine.
    fn sin_ref(self) -> Self;
    /// libm cosine.
    fn cos_ref(self) -> Self;
    /// libm sine and cosine.
    fn sincos_ref(self) -> (Self, Self);
}

impl Reference for f64 {
    const PRECISION: Precision = Precision::F64;

    fn sin_ref(self) -> f64 {
        libm::sin(self)
    }

    fn cos_ref(self) -> f64 {
        libm::cos(self)
    }

    fn sincos_ref(self) -> (f64, f64) {
        libm::sincos(self)
    }
}

impl Reference for f32 {
    const PRECISION: Precision = Precision::F32;

    fn sin_ref(self) -> f32 {
        libm::sinf(self)
    }

    fn cos_ref(self) -> f32 {
        libm::cosf(self)
    }

    fn sincos_ref(self) -> (f32, f32) {
        libm::sincosf(self)
    }
}

/// Outcome of one (function, precision) comparison.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Function measured.
    pub function: Function,
    /// Width measured.
    pub precision: Precision,
    /// Number of sample angles.
    pub samples: usize,
    /// Worst-case absolute error against the reference.
    pub max_error: f64,
    /// Input at which `max_error` occurs.
    pub worst_input: f64,
    /// Best fast-path time over all samples, in nanoseconds.
    pub fast_ns: u64,
    /// Best reference time over all samples, in nanoseconds.
    pub reference_ns: u64,
}

impl Measurement {
    /// Reference time divided by fast time.
    pub fn speedup(&self) -> f64 {
        if self.fast_ns == 0 {
            return f64::INFINITY;
        }
        self.reference_ns as f64 / self.fast_ns as f64
    }

    /// Whether the worst error is above `bound`. NaN always exceeds.
    pub fn exceeds(&self, bound: f64) -> bool {
        self.max_error.is_nan() || self.max_error > bound
    }
}

/// Run `f` over all inputs `repeats` times and return the fastest pass.
///
/// Outputs of the last pass are left in `out`.
fn time_best<T: Copy, R>(
    inputs: &[T],
    out: &mut Vec<R>,
    repeats: u32,
    f: impl Fn(T) -> R,
) -> Duration {
    let mut best = Duration::MAX;
    for _ in 0..repeats.max(1) {
        out.clear();
        let start = Instant::now();
        out.extend(inputs.iter().map(|&x| f(black_box(x))));
        best = best.min(start.elapsed());
        black_box(out.as_slice());
    }
    best
}

/// Worst absolute error and the input where it happens. A NaN error is
/// worse than any finite one and is kept once seen.
fn worst_error<T: Copy + Into<f64>>(inputs: &[T], fast: &[T], reference: &[T]) -> (f64, f64) {
    let mut worst: (f64, f64) = (0.0, 0.0);
    for ((&x, &a), &b) in inputs.iter().zip(fast).zip(reference) {
        let (a, b): (f64, f64) = (a.into(), b.into());
        let e = absolute(a - b);
        if e.is_nan() {
            return (e, x.into());
        }
        if e > worst.0 {
            worst = (e, x.into());
        }
    }
    worst
}

fn split<T: Copy>(pairs: &[(T, T)]) -> (Vec<T>, Vec<T>) {
    pairs.iter().copied().unzip()
}

/// Time the fast and reference paths of `function` over `inputs` and
/// measure the worst-case error between them.
pub fn measure<T: Reference>(function: Function, inputs: &[T], repeats: u32) -> Measurement {
    let (fast_time, ref_time, (max_error, worst_input)) = match function {
        Function::Sin | Function::Cos => {
            let is_sin = function == Function::Sin;
            let fast_fn: fn(T) -> T = if is_sin { T::sin_fast } else { T::cos_fast };
            let ref_fn: fn(T) -> T = if is_sin { T::sin_ref } else { T::cos_ref };
            let mut fast = Vec::with_capacity(inputs.len());
            let mut reference = Vec::with_capacity(inputs.len());
            let fast_time = time_best(inputs, &mut fast, repeats, fast_fn);
            let ref_time = time_best(inputs, &mut reference, repeats, ref_fn);
            (fast_time, ref_time, worst_error(inputs, &fast, &reference))
        }
        Function::Sincos => {
            let mut fast = Vec::with_capacity(inputs.len());
            let mut reference = Vec::with_capacity(inputs.len());
            let fast_time = time_best(inputs, &mut fast, repeats, T::sincos_fast);
            let ref_time = time_best(inputs, &mut reference, repeats, T::sincos_ref);
            let (fast_s, fast_c) = split(&fast);
            let (ref_s, ref_c) = split(&reference);
            let err_s = worst_error(inputs, &fast_s, &ref_s);
            let err_c = worst_error(inputs, &fast_c, &ref_c);
            let worst = if err_c.0.is_nan() || err_c.0 > err_s.0 {
                err_c
            } else {
                err_s
            };
            (fast_time, ref_time, worst)
        }
    };

    let m = Measurement {
        function,
        precision: T::PRECISION,
        samples: inputs.len(),
        max_error,
        worst_input,
        fast_ns: fast_time.as_nanos() as u64,
        reference_ns: ref_time.as_nanos() as u64,
    };
    tracing::debug!(
        function = %m.function,
        precision = %m.precision,
        max_error = m.max_error,
        fast_ns = m.fast_ns,
        reference_ns = m.reference_ns,
        "measured"
    );
    m
}
