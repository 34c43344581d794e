//! Sample-frequency helpers for interpreting transform output.
use crate::error::FftError;

/// Frequencies of the bins of an `n`-point transform with samples `spacing` apart.
///
/// Bin `k` holds frequency `k / (n·spacing)` for the first `⌈n/2⌉` bins; the remaining bins hold
/// the negative frequencies in increasing order, so the output reads
/// `[0, 1, …, ⌈n/2⌉-1, -⌊n/2⌋, …, -1] / (n·spacing)`.
///
/// # Errors
///
/// Returns [`FftError::DimensionMismatch`] if `n == 0` and [`FftError::InvalidSampleSpacing`]
/// if `spacing` is not finite and positive.
pub fn fftfreq(n: usize, spacing: f64) -> Result<Vec<f64>, FftError> {
    let step = bin_width(n, spacing)?;
    let positive = n.div_ceil(2);

    let freqs = (0..positive)
        .map(|k| k as f64 * step)
        .chain((positive..n).map(|k| -((n - k) as f64) * step))
        .collect();
    Ok(freqs)
}

/// The non-negative half of [`fftfreq`]: `[0, 1, …, ⌊n/2⌋] / (n·spacing)`.
///
/// # Errors
///
/// Same as [`fftfreq`].
pub fn rfftfreq(n: usize, spacing: f64) -> Result<Vec<f64>, FftError> {
    let step = bin_width(n, spacing)?;
    Ok((0..=n / 2).map(|k| k as f64 * step).collect())
}

fn bin_width(n: usize, spacing: f64) -> Result<f64, FftError> {
    if n == 0 {
        return Err(FftError::DimensionMismatch {
            detail: "frequency bins need at least one sample",
        });
    }
    if !spacing.is_finite() || spacing <= 0.0 {
        return Err(FftError::InvalidSampleSpacing);
    }
    Ok((n as f64 * spacing).recip())
}
