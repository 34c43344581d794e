//! Radix-2 and radix-4 Cooley-Tukey FFTs over `Complex64` buffers, plus the transforms built on
//! top of them: DCT-II and linear convolution.
//!
//! Every transform runs in place on a caller-owned buffer whose length is an exact power of the
//! chosen radix. Lengths are validated before anything is written, so a call that returns `Err`
//! leaves the buffer as it was.
//!
//! ```
//! use num_complex::Complex64;
//! use radixft::{ifft, transform, Direction, Normalization, Radix, Variant};
//!
//! let mut signal: Vec<Complex64> = (0..16).map(|i| Complex64::new(i as f64, 0.0)).collect();
//! let original = signal.clone();
//!
//! transform(&mut signal, Radix::Four, Variant::Dit, Direction::Forward).unwrap();
//! ifft(&mut signal, Radix::Four, Variant::Dif, Normalization::Backward).unwrap();
//!
//! for (a, b) in signal.iter().zip(original.iter()) {
//!     assert!((a - b).norm() < 1e-12);
//! }
//! ```
use num_complex::Complex64;

use crate::algorithms::dif::dif_with_planner;
use crate::algorithms::dit::dit_with_planner;
use crate::utils::{combine_re_im, deinterleave_complex64};

pub mod algorithms;
pub mod convolve;
pub mod dct;
pub mod dft;
pub mod error;
pub mod helpers;
mod kernels;
pub mod options;
mod parallel;
pub mod planner;
pub mod twiddles;
mod utils;

pub use crate::convolve::{convolve, ConvolutionMethod, ConvolutionMode};
pub use crate::dct::{dct2, Dct2Plan, DctDerivation};
pub use crate::error::FftError;
pub use crate::options::{Normalization, Options, Variant};
pub use crate::planner::{Direction, PlanCache, Planner, Radix};

/// FFT of `data` in place, with [`Normalization::Backward`] and options guessed from the length.
///
/// # Errors
///
/// Returns [`FftError::InvalidLength`] if `data.len()` is not a power of `radix`.
pub fn transform(
    data: &mut [Complex64],
    radix: Radix,
    variant: Variant,
    direction: Direction,
) -> Result<(), FftError> {
    let opts = Options::guess_options(data.len());
    transform_with_opts(data, radix, variant, direction, &opts)
}

/// FFT of `data` in place with explicit [`Options`].
///
/// # Errors
///
/// Returns [`FftError::InvalidLength`] if `data.len()` is not a power of `radix`.
pub fn transform_with_opts(
    data: &mut [Complex64],
    radix: Radix,
    variant: Variant,
    direction: Direction,
    opts: &Options,
) -> Result<(), FftError> {
    let planner = Planner::new(data.len(), radix, direction)?;
    transform_with_opts_and_plan(data, variant, opts, &planner)
}

/// FFT of `data` in place, reusing a pre-computed [`Planner`].
///
/// The planner fixes the radix and the direction. An inverse planner runs the butterflies on the
/// conjugate twiddle table.
///
/// # Errors
///
/// Returns [`FftError::LengthMismatch`] if `data.len()` differs from the planner's length.
pub fn transform_with_opts_and_plan(
    data: &mut [Complex64],
    variant: Variant,
    opts: &Options,
    planner: &Planner,
) -> Result<(), FftError> {
    match variant {
        Variant::Dit => dit_with_planner(data, planner, opts.multithreaded)?,
        Variant::Dif => dif_with_planner(data, planner, opts.multithreaded)?,
    }

    if let Some(factor) = opts.normalization.factor(planner.direction(), data.len()) {
        scale(data, factor);
    }
    Ok(())
}

/// Inverse FFT of `data` in place, computed with the forward engine on conjugated samples.
///
/// `normalization` decides the scale of the result; with [`Normalization::Backward`] this undoes
/// a forward [`transform`] exactly.
///
/// # Errors
///
/// Returns [`FftError::InvalidLength`] if `data.len()` is not a power of `radix`.
pub fn ifft(
    data: &mut [Complex64],
    radix: Radix,
    variant: Variant,
    normalization: Normalization,
) -> Result<(), FftError> {
    let planner = Planner::new(data.len(), radix, Direction::Forward)?;
    let opts = Options::guess_options(data.len()).with_normalization(normalization);
    ifft_with_plan(data, variant, &opts, &planner)
}

/// Conjugate, run the forward `planner`, conjugate, scale for the inverse direction.
pub(crate) fn ifft_with_plan(
    data: &mut [Complex64],
    variant: Variant,
    opts: &Options,
    planner: &Planner,
) -> Result<(), FftError> {
    if data.len() != planner.len() {
        return Err(FftError::LengthMismatch {
            expected: planner.len(),
            actual: data.len(),
        });
    }

    data.iter_mut().for_each(|z| *z = z.conj());
    let unscaled = Options::default()
        .with_normalization(Normalization::Backward)
        .with_multithreaded(opts.multithreaded);
    transform_with_opts_and_plan(data, variant, &unscaled, planner)?;
    data.iter_mut().for_each(|z| *z = z.conj());

    if let Some(factor) = opts.normalization.factor(Direction::Inverse, data.len()) {
        scale(data, factor);
    }
    Ok(())
}

/// FFT over separate real and imaginary buffers, in place.
///
/// # Errors
///
/// Returns [`FftError::DimensionMismatch`] if `reals` and `imags` differ in length and
/// [`FftError::InvalidLength`] if that length is not a power of `radix`.
pub fn transform_split(
    reals: &mut [f64],
    imags: &mut [f64],
    radix: Radix,
    variant: Variant,
    direction: Direction,
) -> Result<(), FftError> {
    let mut signal = combine_re_im(reals, imags)?;
    transform(&mut signal, radix, variant, direction)?;

    let (re, im) = deinterleave_complex64(&signal);
    reals.copy_from_slice(&re);
    imags.copy_from_slice(&im);
    Ok(())
}

fn scale(data: &mut [Complex64], factor: f64) {
    data.iter_mut().for_each(|z| *z *= factor);
}
