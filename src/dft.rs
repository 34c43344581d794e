//! Direct evaluation of the discrete Fourier transform.
//!
//! Quadratic in the length but defined for every length. The derived transforms use it when
//! their working length is not a power of two; [`transform`](crate::transform) never does.
use std::f64::consts::PI;

use num_complex::Complex64;

use crate::planner::Direction;

/// Unscaled DFT of `input`: `X[k] = Σ x[j]·exp(∓2πi·jk/N)`.
pub fn dft(input: &[Complex64], direction: Direction) -> Vec<Complex64> {
    let n = input.len();
    let angle_mult = direction.sign() * 2.0 * PI / n as f64;
    let roots: Vec<Complex64> = (0..n)
        .map(|m| Complex64::from_polar(1.0, angle_mult * m as f64))
        .collect();

    (0..n)
        .map(|k| {
            input
                .iter()
                .enumerate()
                .map(|(j, x)| x * roots[(j * k) % n])
                .sum()
        })
        .collect()
}
