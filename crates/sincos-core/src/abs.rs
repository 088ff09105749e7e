//! Branch-free absolute value on the raw IEEE 754 bit pattern.

/// Types whose absolute value can be taken by clearing a sign bit.
pub trait Absolute: Copy {
    /// `self` with its sign bit cleared.
    fn absolute(self) -> Self;
}

impl Absolute for f32 {
    #[inline(always)]
    fn absolute(self) -> Self {
        f32::from_bits(self.to_bits() & 0x7FFF_FFFF)
    }
}

impl Absolute for f64 {
    #[inline(always)]
    fn absolute(self) -> Self {
        f64::from_bits(self.to_bits() & 0x7FFF_FFFF_FFFF_FFFF)
    }
}

/// Absolute value by sign-bit clear.
///
/// Unlike a compare-and-negate, `-0.0` maps to `+0.0` and NaN payloads are
/// kept.
///
/// # Examples
///
/// ```
/// use sincos_core::absolute;
///
/// assert_eq!(absolute(-2.5_f64), 2.5);
/// assert_eq!(absolute(-2.5_f32), 2.5);
/// assert!(absolute(-0.0_f64).is_sign_positive());
/// ```
#[inline(always)]
pub fn absolute<T: Absolute>(x: T) -> T {
    x.absolute()
}
