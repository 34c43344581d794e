//! DCT-II computed through the FFT.
//!
//! The output follows the unnormalized convention `y[k] = 2·Σ x[n]·cos(πk(2n+1)/(2N))`. Three
//! derivations are available and agree to rounding:
//!
//! - [`DctDerivation::MirrorPad`]: transform `x` followed by its reverse (length `2N`)
//! - [`DctDerivation::ZeroPad`]: transform `x` followed by `N` zeros (length `2N`)
//! - [`DctDerivation::Reorder`]: transform the even samples followed by the odd samples in
//!   descending order (length `N`)
//!
//! Each one then rotates bin `k` by `exp(-iπk/(2N))` and keeps the real part. When the working
//! length is not a power of two the spectrum comes from the direct [`dft`].
use std::f64::consts::PI;
use std::iter;
use std::str::FromStr;

use log::debug;
use num_complex::Complex64;

use crate::dft::dft;
use crate::error::FftError;
use crate::options::{Options, Variant};
use crate::planner::{Direction, Planner, Radix};
use crate::transform_with_opts_and_plan;

/// How the DCT-II input is laid out before the FFT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DctDerivation {
    MirrorPad,
    ZeroPad,
    /// Same-length transform, no padding.
    #[default]
    Reorder,
}

impl FromStr for DctDerivation {
    type Err = FftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mirror" => Ok(DctDerivation::MirrorPad),
            "zero-pad" => Ok(DctDerivation::ZeroPad),
            "reorder" => Ok(DctDerivation::Reorder),
            _ => Err(FftError::unsupported("DCT derivation", s)),
        }
    }
}

/// A reusable DCT-II over a fixed number of samples.
#[derive(Debug)]
pub struct Dct2Plan {
    len: usize,
    derivation: DctDerivation,
    /// `None` when the working length is not a power of two
    planner: Option<Planner>,
    /// `scale·exp(-iπk/(2N))` for `k < N`
    phase: Vec<Complex64>,
}

impl Dct2Plan {
    /// # Errors
    ///
    /// Returns [`FftError::DimensionMismatch`] if `len == 0`.
    pub fn new(len: usize, derivation: DctDerivation) -> Result<Self, FftError> {
        if len == 0 {
            return Err(FftError::DimensionMismatch {
                detail: "DCT-II needs at least one sample",
            });
        }

        let (fft_len, scale) = match derivation {
            DctDerivation::MirrorPad => (2 * len, 1.0),
            DctDerivation::ZeroPad => (2 * len, 2.0),
            DctDerivation::Reorder => (len, 2.0),
        };

        let planner = if fft_len.is_power_of_two() {
            Some(Planner::new(fft_len, Radix::Two, Direction::Forward)?)
        } else {
            debug!("DCT-II of {len} samples falls back to the direct DFT");
            None
        };

        let angle_mult = -PI / (2 * len) as f64;
        let phase = (0..len)
            .map(|k| Complex64::from_polar(scale, angle_mult * k as f64))
            .collect();

        Ok(Self {
            len,
            derivation,
            planner,
            phase,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn derivation(&self) -> DctDerivation {
        self.derivation
    }

    /// DCT-II of `x`.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::LengthMismatch`] if `x.len()` differs from the planned length.
    pub fn process(&self, x: &[f64]) -> Result<Vec<f64>, FftError> {
        if x.len() != self.len {
            return Err(FftError::LengthMismatch {
                expected: self.len,
                actual: x.len(),
            });
        }

        let samples: Vec<f64> = match self.derivation {
            DctDerivation::MirrorPad => x.iter().chain(x.iter().rev()).copied().collect(),
            DctDerivation::ZeroPad => x
                .iter()
                .copied()
                .chain(iter::repeat(0.0).take(self.len))
                .collect(),
            // x[0], x[2], x[4], ... then the odd indices from the top down
            DctDerivation::Reorder => x
                .iter()
                .step_by(2)
                .chain(x.iter().skip(1).step_by(2).rev())
                .copied()
                .collect(),
        };
        let mut buf: Vec<Complex64> = samples.iter().map(|&v| Complex64::new(v, 0.0)).collect();

        let spectrum = match &self.planner {
            Some(planner) => {
                let opts = Options::default();
                transform_with_opts_and_plan(&mut buf, Variant::Dit, &opts, planner)?;
                buf
            }
            None => dft(&buf, Direction::Forward),
        };

        Ok(spectrum
            .iter()
            .zip(self.phase.iter())
            .map(|(z, w)| (z * w).re)
            .collect())
    }
}

/// DCT-II of `x` using `derivation`.
///
/// # Errors
///
/// Returns [`FftError::DimensionMismatch`] if `x` is empty.
pub fn dct2(x: &[f64], derivation: DctDerivation) -> Result<Vec<f64>, FftError> {
    Dct2Plan::new(x.len(), derivation)?.process(x)
}
