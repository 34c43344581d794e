//! Radix-2 butterfly stages.
//!
//! A stage works on chunks of `2·dist` samples, pairing `chunk[n]` with `chunk[n + dist]`. The
//! twiddle for pair `n` is `W_N^(n·step)` with `step = N / (2·dist)`; pair `0` always uses the
//! exact value `1` and skips the multiplication.
use num_complex::Complex64;

use crate::parallel::for_each_group;
use crate::twiddles::TwiddleTable;

/// One decimation-in-time stage: the bottom input is rotated before the sum and difference.
pub fn radix2_dit_stage(
    data: &mut [Complex64],
    twiddles: &TwiddleTable,
    dist: usize,
    multithreaded: bool,
) {
    let chunk_size = dist << 1;
    let step = twiddles.fft_len() / chunk_size;
    for_each_group::<_, _, 2>(data, chunk_size, multithreaded, |[top, bottom], start| {
        radix2_dit_butterflies(top, bottom, start, twiddles, step)
    });
}

/// One decimation-in-frequency stage: the difference is rotated after the sum and difference.
pub fn radix2_dif_stage(
    data: &mut [Complex64],
    twiddles: &TwiddleTable,
    dist: usize,
    multithreaded: bool,
) {
    let chunk_size = dist << 1;
    let step = twiddles.fft_len() / chunk_size;
    for_each_group::<_, _, 2>(data, chunk_size, multithreaded, |[top, bottom], start| {
        radix2_dif_butterflies(top, bottom, start, twiddles, step)
    });
}

#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
#[inline]
fn radix2_dit_butterflies(
    top: &mut [Complex64],
    bottom: &mut [Complex64],
    start: usize,
    twiddles: &TwiddleTable,
    step: usize,
) {
    top.iter_mut()
        .zip(bottom.iter_mut())
        .zip(start..)
        .for_each(|((z0, z1), n)| {
            let a = *z0;
            let b = if n == 0 {
                *z1
            } else {
                *z1 * twiddles.get(n * step)
            };

            *z0 = a + b;
            *z1 = a - b;
        });
}

#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
#[inline]
fn radix2_dif_butterflies(
    top: &mut [Complex64],
    bottom: &mut [Complex64],
    start: usize,
    twiddles: &TwiddleTable,
    step: usize,
) {
    top.iter_mut()
        .zip(bottom.iter_mut())
        .zip(start..)
        .for_each(|((z0, z1), n)| {
            let a = *z0;
            let b = *z1;

            *z0 = a + b;
            let diff = a - b;
            *z1 = if n == 0 {
                diff
            } else {
                diff * twiddles.get(n * step)
            };
        });
}
