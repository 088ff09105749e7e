//! Series coefficients for the reduced-angle polynomials.
//!
//! Both tables hold the terms *after* the leading one, lowest degree first:
//!
//! ```text
//! cos(x) ≈ 1 + x²·(c₀ + x²·(c₁ + … + x²·c₅))
//! sin(x) ≈ x + x³·(s₀ + x²·(s₁ + … + x²·s₅))
//! ```
//!
//! On the reduction interval |x| ≤ π/4 the first omitted terms are
//! x¹⁴/14! ≈ 4e-13 (cosine) and x¹⁵/15! ≈ 2e-14 (sine), so truncation
//! error sits far below the f32 output precision and near the f64 noise
//! floor of the turn reduction.

/// Cosine-family coefficients: `-1/2!, 1/4!, -1/6!, 1/8!, -1/10!, 1/12!`.
pub const COS_COEFFS: [f64; 6] = [
    -5.0e-1,
    4.166_666_666_666_666_4e-2,
    -1.388_888_888_888_889e-3,
    2.480_158_730_158_73e-5,
    -2.755_731_922_398_589e-7,
    2.087_675_698_786_81e-9,
];

/// Sine-family coefficients: `-1/3!, 1/5!, -1/7!, 1/9!, -1/11!, 1/13!`.
pub const SIN_COEFFS: [f64; 6] = [
    -1.666_666_666_666_666_6e-1,
    8.333_333_333_333_333e-3,
    -1.984_126_984_126_984e-4,
    2.755_731_922_398_589_3e-6,
    -2.505_210_838_544_172e-8,
    1.605_904_383_682_161_3e-10,
];

#[cfg(test)]
mod tests {
    use super::*;

    fn factorial(n: u32) -> f64 {
        (1..=n).map(f64::from).product()
    }

    #[test]
    fn cos_coeffs_are_alternating_even_reciprocal_factorials() {
        for (i, &c) in COS_COEFFS.iter().enumerate() {
            let degree = 2 * (i as u32 + 1);
            let sign = if i % 2 == 0 { -1.0 } else { 1.0 };
            let expected = sign / factorial(degree);
            assert!(
                ((c - expected) / expected).abs() < 1e-12,
                "COS_COEFFS[{i}] = {c:e}, expected {expected:e}"
            );
        }
    }

    #[test]
    fn sin_coeffs_are_alternating_odd_reciprocal_factorials() {
        for (i, &c) in SIN_COEFFS.iter().enumerate() {
            let degree = 2 * (i as u32 + 1) + 1;
            let sign = if i % 2 == 0 { -1.0 } else { 1.0 };
            let expected = sign / factorial(degree);
            assert!(
                ((c - expected) / expected).abs() < 1e-12,
                "SIN_COEFFS[{i}] = {c:e}, expected {expected:e}"
            );
        }
    }
}
