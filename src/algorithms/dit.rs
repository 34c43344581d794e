//! Decimation-in-Time (DIT) FFT Implementation
//!
//! The DIT algorithm decomposes the DFT from small to large sub-problems. Input is processed in
//! digit-reversed order, and output is produced in natural order.
//!
//! ## Algorithm Overview
//!
//! 1. Apply digit reversal to the input data
//! 2. Start with the smallest butterflies (span 1)
//! 3. Multiply the span by the radix after every stage, up to `N / radix`
use num_complex::Complex64;

use crate::error::FftError;
use crate::kernels::radix2::radix2_dit_stage;
use crate::kernels::radix4::radix4_dit_stage;
use crate::planner::{Planner, Radix};

/// DIT FFT with a pre-computed planner.
///
/// # Errors
///
/// Returns [`FftError::LengthMismatch`] if `data` does not have the planner's length. Nothing is
/// written in that case.
pub(crate) fn dit_with_planner(
    data: &mut [Complex64],
    planner: &Planner,
    multithreaded: bool,
) -> Result<(), FftError> {
    planner.reversal().apply(data)?;

    let twiddles = planner.twiddles();
    let radix = planner.radix().value();
    let mut span = 1;
    for _ in 0..planner.stages() {
        match planner.radix() {
            Radix::Two => radix2_dit_stage(data, twiddles, span, multithreaded),
            Radix::Four => radix4_dit_stage(data, twiddles, span, multithreaded),
        }
        span *= radix;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::Direction;

    #[test]
    fn radix_2_eight_point_ramp() {
        // DFT of [0, 1, ..., 7]: X[0] = 28, X[k] = -4 + 4i·cot(πk/8)
        let planner = Planner::new(8, Radix::Two, Direction::Forward).unwrap();
        let mut data: Vec<Complex64> = (0..8).map(|i| Complex64::new(i as f64, 0.0)).collect();
        dit_with_planner(&mut data, &planner, false).unwrap();

        assert!((data[0] - Complex64::new(28.0, 0.0)).norm() < 1e-12);
        for (k, z) in data.iter().enumerate().skip(1) {
            let cot = 1.0 / (std::f64::consts::PI * k as f64 / 8.0).tan();
            let expected = Complex64::new(-4.0, 4.0 * cot);
            assert!((z - expected).norm() < 1e-12, "X[{k}] = {z}, expected {expected}");
        }
    }

    #[test]
    fn single_point_is_untouched() {
        for radix in [Radix::Two, Radix::Four] {
            let planner = Planner::new(1, radix, Direction::Forward).unwrap();
            let mut data = vec![Complex64::new(3.0, -2.0)];
            dit_with_planner(&mut data, &planner, false).unwrap();
            assert_eq!(data, vec![Complex64::new(3.0, -2.0)]);
        }
    }
}
