pub extern crate rustfft;

// export rustfft to radixft
use std::f64::consts::PI;

use rand::{distributions::Uniform, prelude::*};
use rustfft::num_complex::Complex64;
use rustfft::num_traits::Float;

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Fill `signal` with random complex samples, both parts uniform in `[-1, 1)`.
pub fn gen_random_signal(signal: &mut [Complex64]) {
    let mut rng = thread_rng();

    let uniform_dist = Uniform::new(-1.0, 1.0);
    for z in signal.iter_mut() {
        *z = Complex64::new(uniform_dist.sample(&mut rng), uniform_dist.sample(&mut rng));
    }
}

/// DCT-II straight from the definition, `y[k] = 2·Σ x[n]·cos(πk(2n+1)/(2N))`.
pub fn dct2_reference(x: &[f64]) -> Vec<f64> {
    let n = x.len() as f64;
    (0..x.len())
        .map(|k| {
            2.0 * x
                .iter()
                .enumerate()
                .map(|(i, v)| v * (PI * k as f64 * (2 * i + 1) as f64 / (2.0 * n)).cos())
                .sum::<f64>()
        })
        .collect()
}
