//! Utility functions such as interleave/deinterleave

use bytemuck::cast_slice;
use num_complex::Complex;
use num_traits::Float;

use crate::error::FftError;

/// Separates data like `[1, 2, 3, 4]` into `([1, 3], [2, 4])`. A trailing odd element is dropped.
pub(crate) fn deinterleave<T: Copy>(input: &[T]) -> (Vec<T>, Vec<T>) {
    input.chunks_exact(2).map(|c| (c[0], c[1])).unzip()
}

/// Utility function to separate a slice of [`Complex64`](num_complex::Complex64) into its real
/// and imaginary parts.
pub(crate) fn deinterleave_complex64(signal: &[Complex<f64>]) -> (Vec<f64>, Vec<f64>) {
    let complex_t: &[f64] = cast_slice(signal);
    deinterleave(complex_t)
}

/// Utility function to combine separate vectors of real and imaginary components
/// into a single vector of Complex Number Structs.
///
/// # Errors
///
/// Returns [`FftError::DimensionMismatch`] if `reals.len() != imags.len()`.
pub(crate) fn combine_re_im<T: Float>(
    reals: &[T],
    imags: &[T],
) -> Result<Vec<Complex<T>>, FftError> {
    if reals.len() != imags.len() {
        return Err(FftError::DimensionMismatch {
            detail: "real and imaginary buffers differ in length",
        });
    }

    Ok(reals
        .iter()
        .zip(imags.iter())
        .map(|(z_re, z_im)| Complex::new(*z_re, *z_im))
        .collect())
}

/// Real parts of `signal`.
pub(crate) fn real_parts(signal: &[Complex<f64>]) -> Vec<f64> {
    signal.iter().map(|z| z.re).collect()
}
