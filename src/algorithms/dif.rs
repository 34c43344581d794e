//! Decimation-in-Frequency (DIF) FFT Implementation
//!
//! The DIF algorithm applies butterflies whose span shrinks from `N / radix` down to 1. Input is
//! processed in natural order and the output comes out digit-reversed, so a final permutation
//! puts it back in natural order.
//!
//! ## Algorithm Overview
//!
//! 1. Start with butterflies spanning `N / radix` samples
//! 2. Divide the span by the radix after every stage
//! 3. Apply digit reversal to the output
use num_complex::Complex64;

use crate::error::FftError;
use crate::kernels::radix2::radix2_dif_stage;
use crate::kernels::radix4::radix4_dif_stage;
use crate::planner::{Planner, Radix};

/// DIF FFT with a pre-computed planner.
///
/// # Errors
///
/// Returns [`FftError::LengthMismatch`] if `data` does not have the planner's length. Nothing is
/// written in that case.
pub(crate) fn dif_with_planner(
    data: &mut [Complex64],
    planner: &Planner,
    multithreaded: bool,
) -> Result<(), FftError> {
    if data.len() != planner.len() {
        return Err(FftError::LengthMismatch {
            expected: planner.len(),
            actual: data.len(),
        });
    }

    let twiddles = planner.twiddles();
    let radix = planner.radix().value();
    let mut span = planner.len() / radix;
    for _ in 0..planner.stages() {
        match planner.radix() {
            Radix::Two => radix2_dif_stage(data, twiddles, span, multithreaded),
            Radix::Four => radix4_dif_stage(data, twiddles, span, multithreaded),
        }
        span /= radix;
    }

    planner.reversal().apply(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::dit::dit_with_planner;
    use crate::planner::Direction;

    #[test]
    fn agrees_with_dit() {
        let cases = [
            (2, Radix::Two),
            (32, Radix::Two),
            (4, Radix::Four),
            (256, Radix::Four),
        ];
        for (len, radix) in cases {
            let planner = Planner::new(len, radix, Direction::Forward).unwrap();
            let input: Vec<Complex64> = (0..len)
                .map(|i| Complex64::new((i as f64).sin(), (i as f64 * 0.3).cos()))
                .collect();

            let mut dif = input.clone();
            dif_with_planner(&mut dif, &planner, false).unwrap();
            let mut dit = input;
            dit_with_planner(&mut dit, &planner, false).unwrap();

            for (a, b) in dif.iter().zip(dit.iter()) {
                assert!((a - b).norm() < 1e-9, "N = {len}: {a} != {b}");
            }
        }
    }

    #[test]
    fn constant_input_concentrates_in_bin_zero() {
        let planner = Planner::new(64, Radix::Four, Direction::Forward).unwrap();
        let mut data = vec![Complex64::new(1.0, 0.0); 64];
        dif_with_planner(&mut data, &planner, false).unwrap();

        assert!((data[0] - Complex64::new(64.0, 0.0)).norm() < 1e-12);
        for z in &data[1..] {
            assert!(z.norm() < 1e-12);
        }
    }
}
