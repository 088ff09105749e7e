//! Sample grid generation.
//!
//! A grid of `2·half + 1` angles `x_i = 2π·turns·i / half` for
//! `i ∈ [-half, half]`, symmetric around zero and hitting it exactly.

use std::f32::consts::TAU as TAU_F32;
use std::f64::consts::TAU;

/// f64 grid spanning `±turns` full turns.
pub fn grid_f64(half: usize, turns: f64) -> Vec<f64> {
    let half_i = half as i64;
    let step = TAU * turns / half as f64;
    (-half_i..=half_i).map(|i| step * i as f64).collect()
}

/// f32 grid spanning `±turns` full turns, built in f32 arithmetic.
pub fn grid_f32(half: usize, turns: f32) -> Vec<f32> {
    let half_i = half as i64;
    let step = TAU_F32 * turns / half as f32;
    (-half_i..=half_i).map(|i| step * i as f32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_has_odd_length_and_spans_turns() {
        let g = grid_f64(1000, 4.0);
        assert_eq!(g.len(), 2001);
        assert_eq!(g[1000], 0.0);
        assert!((g[0] + 4.0 * TAU).abs() < 1e-12);
        assert!((g[2000] - 4.0 * TAU).abs() < 1e-12);
    }

    #[test]
    fn grid_is_symmetric() {
        let g = grid_f64(500, 2.5);
        for i in 0..=500 {
            assert_eq!(g[500 - i], -g[500 + i]);
        }
    }

    #[test]
    fn grid_f32_spans_turns() {
        let g = grid_f32(1024, 16.0);
        assert_eq!(g.len(), 2049);
        assert_eq!(g[1024], 0.0);
        assert!((g[2048] - 16.0 * TAU_F32).abs() < 1e-3);
    }

    #[test]
    fn grid_is_increasing() {
        let g = grid_f32(256, 1.0);
        assert!(g.windows(2).all(|w| w[0] < w[1]));
    }
}
