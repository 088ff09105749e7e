//! Sincos Core - fast approximate sine and cosine
//!
//! Evaluates `sin`, `cos` and the `(sin, cos)` pair for `f32` and `f64`
//! without calling into libm, trading a small bounded error for latency.
//!
//! # How it works
//!
//! 1. **Range reduction** ([`reduce`]): take |x| as a fraction of a full
//!    turn, pick one of eight octants and re-centre the angle into
//!    \[−π/4, π/4\].
//! 2. **Classification**: the octant decides which series (sine or cosine)
//!    reconstructs the result and with which sign.
//! 3. **Series evaluation** ([`series`]): a degree-13 sine or degree-12
//!    cosine polynomial in Horner form, coefficients in [`coeffs`].
//!
//! No tables beyond twelve constants, no loops, no library calls on the hot
//! path (the turn truncation is a single `trunc`).
//!
//! # API
//!
//! - [`sin_fast`], [`cos_fast`], [`sincos_fast`] - generic over [`FastTrig`]
//!   (`f32` and `f64`)
//! - [`absolute`] - sign-bit-clear absolute value for `f32` / `f64`
//! - [`reduce`] / [`Reduction`] - the classifier, exposed for inspection
//!
//! # Accuracy
//!
//! Max absolute error below 1e-9 in f64 for |x| ≤ 8π. `f32` entry points
//! compute in f64 and narrow once, so they sit within rounding of
//! `libm::sinf` / `libm::cosf`. Very large inputs lose precision in the
//! turn reduction; non-finite inputs yield NaN. Neither is reported as an
//! error.
//!
//! # Example
//!
//! ```rust
//! use sincos_core::{cos_fast, sin_fast, sincos_fast};
//!
//! let x = 1.25_f64;
//! assert!((sin_fast(x) - libm::sin(x)).abs() < 1e-12);
//! assert!((cos_fast(x as f32) - libm::cosf(x as f32)).abs() < 1e-6);
//!
//! let (s, c) = sincos_fast(x);
//! assert!((s * s + c * c - 1.0).abs() < 1e-12);
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! sincos-core = { version = "0.1", default-features = false }
//! ```
//!
//! Enable the `fma` feature to evaluate the series with fused multiply-adds.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod abs;
pub mod coeffs;
pub mod fast_trig;
pub mod reduce;
pub mod series;

pub use abs::{Absolute, absolute};
pub use coeffs::{COS_COEFFS, SIN_COEFFS};
pub use fast_trig::{FastTrig, cos_fast, sin_fast, sincos_fast};
pub use reduce::{Reduction, Series, reduce};
pub use series::{cos_series, sin_series};
