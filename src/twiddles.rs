//! Twiddle factor generation.
//!
//! A [`TwiddleTable`] for a transform of length `N` stores the `N/radix` roots of unity
//! `exp(∓2πi·m/N)` for `m` in `0..N/radix`. Butterflies need exponents up to `3N/4` for radix 4
//! and up to `N/2` for radix 2; those are served from the stored roots combined with an exact
//! rotation by `exp(∓2πi/radix)`, so no extra storage or rounding is involved.
use std::f64::consts::PI;

use num_complex::Complex64;
use num_traits::One;

use crate::error::FftError;
use crate::planner::{Direction, Radix};

/// Pre-computed roots of unity for one `(length, radix, direction)` triple.
///
/// Immutable after construction and safe to share between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct TwiddleTable {
    fft_len: usize,
    radix: Radix,
    direction: Direction,
    roots: Vec<Complex64>,
}

impl TwiddleTable {
    /// Build the table for a transform of `fft_len` samples.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::InvalidLength`] if `fft_len` is zero or not a power of `radix`.
    pub fn new(fft_len: usize, radix: Radix, direction: Direction) -> Result<Self, FftError> {
        radix.stages(fft_len).ok_or(FftError::InvalidLength {
            len: fft_len,
            radix: radix.value(),
        })?;

        let count = fft_len / radix.value();
        let angle_mult = direction.sign() * 2.0 * PI / fft_len as f64;
        let roots = (0..count)
            .map(|m| {
                let (sin, cos) = (angle_mult * m as f64).sin_cos();
                Complex64::new(cos, sin)
            })
            .collect();

        Ok(Self {
            fft_len,
            radix,
            direction,
            roots,
        })
    }

    /// `exp(∓2πi·m/N)` for any exponent `m < N`.
    #[inline]
    pub fn get(&self, m: usize) -> Complex64 {
        debug_assert!(m < self.fft_len);
        if m == 0 {
            return Complex64::one();
        }

        let count = self.roots.len();
        let (turns, rem) = (m / count, m % count);
        let w = self.roots[rem];
        match self.radix {
            Radix::Two if turns % 2 == 1 => -w,
            Radix::Two => w,
            Radix::Four => match turns % 4 {
                0 => w,
                1 => quarter_turn(w, self.direction),
                2 => -w,
                _ => -quarter_turn(w, self.direction),
            },
        }
    }

    /// The stored roots, indexed `0..N/radix`.
    pub fn as_slice(&self) -> &[Complex64] {
        &self.roots
    }

    /// Length of the transform this table was built for.
    pub fn fft_len(&self) -> usize {
        self.fft_len
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// Multiply `z` by `exp(∓iπ/2)`, i.e. by `-i` for the forward direction and `+i` for the inverse.
#[inline]
pub(crate) fn quarter_turn(z: Complex64, direction: Direction) -> Complex64 {
    match direction {
        Direction::Forward => Complex64::new(z.im, -z.re),
        Direction::Inverse => Complex64::new(-z.im, z.re),
    }
}
