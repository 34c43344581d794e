//! Linear convolution of real sequences, directly or through the FFT.
use std::str::FromStr;

use log::debug;
use num_complex::Complex64;

use crate::error::FftError;
use crate::options::{Options, Variant};
use crate::planner::{Direction, Planner, Radix};
use crate::utils::real_parts;
use crate::{ifft_with_plan, transform_with_opts_and_plan};

/// `Auto` convolves directly while `len(signal)·len(filter)` stays at or below this.
const DIRECT_MAX_WORK: usize = 4096;

/// Which part of the full convolution is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConvolutionMode {
    /// All `n + m - 1` samples.
    #[default]
    Full,
    /// The `max - min + 1` samples where the shorter operand overlaps the longer one completely.
    Valid,
    /// `max(n, m)` samples centered on the full result.
    Same,
}

impl FromStr for ConvolutionMode {
    type Err = FftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "full" => Ok(ConvolutionMode::Full),
            "valid" => Ok(ConvolutionMode::Valid),
            "same" => Ok(ConvolutionMode::Same),
            _ => Err(FftError::unsupported("convolution mode", s)),
        }
    }
}

/// How the full convolution is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConvolutionMethod {
    /// The `O(n·m)` sum.
    Direct,
    /// Pointwise product of radix-2 spectra, zero-padded to the next power of two.
    Fft,
    /// `Direct` for small operands, `Fft` otherwise.
    #[default]
    Auto,
}

impl FromStr for ConvolutionMethod {
    type Err = FftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "direct" => Ok(ConvolutionMethod::Direct),
            "fft" => Ok(ConvolutionMethod::Fft),
            "auto" => Ok(ConvolutionMethod::Auto),
            _ => Err(FftError::unsupported("convolution method", s)),
        }
    }
}

/// Convolve `signal` with `filter` and crop the result according to `mode`.
///
/// The operands are interchangeable: `Valid` and `Same` are measured against the longer one.
///
/// # Errors
///
/// Returns [`FftError::DimensionMismatch`] if either operand is empty.
pub fn convolve(
    signal: &[f64],
    filter: &[f64],
    mode: ConvolutionMode,
    method: ConvolutionMethod,
) -> Result<Vec<f64>, FftError> {
    if signal.is_empty() || filter.is_empty() {
        return Err(FftError::DimensionMismatch {
            detail: "convolution operands must not be empty",
        });
    }

    let method = match method {
        ConvolutionMethod::Auto if signal.len().saturating_mul(filter.len()) <= DIRECT_MAX_WORK => {
            ConvolutionMethod::Direct
        }
        ConvolutionMethod::Auto => ConvolutionMethod::Fft,
        chosen => chosen,
    };
    debug!(
        "convolving {} x {} samples ({mode:?}) with the {method:?} method",
        signal.len(),
        filter.len()
    );

    let full = match method {
        ConvolutionMethod::Fft => fft_full(signal, filter)?,
        _ => direct_full(signal, filter),
    };
    Ok(crop(full, signal.len(), filter.len(), mode))
}

fn direct_full(signal: &[f64], filter: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0; signal.len() + filter.len() - 1];
    for (i, s) in signal.iter().enumerate() {
        for (j, f) in filter.iter().enumerate() {
            out[i + j] += s * f;
        }
    }
    out
}

fn fft_full(signal: &[f64], filter: &[f64]) -> Result<Vec<f64>, FftError> {
    let full_len = signal.len() + filter.len() - 1;
    let fft_len = full_len.next_power_of_two();
    let planner = Planner::new(fft_len, Radix::Two, Direction::Forward)?;
    let opts = Options::guess_options(fft_len);

    let padded = |x: &[f64]| -> Vec<Complex64> {
        let mut buf = vec![Complex64::default(); fft_len];
        buf.iter_mut()
            .zip(x.iter())
            .for_each(|(z, &v)| *z = Complex64::new(v, 0.0));
        buf
    };

    let mut lhs = padded(signal);
    let mut rhs = padded(filter);
    transform_with_opts_and_plan(&mut lhs, Variant::Dif, &opts, &planner)?;
    transform_with_opts_and_plan(&mut rhs, Variant::Dif, &opts, &planner)?;

    lhs.iter_mut().zip(rhs.iter()).for_each(|(a, b)| *a *= b);
    ifft_with_plan(&mut lhs, Variant::Dit, &opts, &planner)?;

    let mut out = real_parts(&lhs);
    out.truncate(full_len);
    Ok(out)
}

fn crop(mut full: Vec<f64>, n: usize, m: usize, mode: ConvolutionMode) -> Vec<f64> {
    let (longer, shorter) = (n.max(m), n.min(m));
    let (start, len) = match mode {
        ConvolutionMode::Full => return full,
        ConvolutionMode::Valid => (shorter - 1, longer - shorter + 1),
        ConvolutionMode::Same => ((shorter - 1) / 2, longer),
    };
    full.drain(..start);
    full.truncate(len);
    full
}
