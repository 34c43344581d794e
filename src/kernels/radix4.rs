//! Radix-4 butterfly stages.
//!
//! A stage works on chunks of `4·quarter` samples. Butterfly `k` combines the four inputs
//! `a, b, c, d` found at `chunk[k + j·quarter]` for `j = 0..4`, with twiddles `w1, w2, w3` taken
//! at exponents `k·stride`, `2k·stride` and `3k·stride` where `stride = N / (4·quarter)`. With
//! `-i` written as the forward quarter turn (`+i` for the inverse direction), DIT computes
//!
//! ```text
//! e = a + c·w2        f = a - c·w2
//! g = b·w1 + d·w3     h = b·w1 - d·w3
//! out_a = e + g       out_b = f - i·h
//! out_c = e - g       out_d = f + i·h
//! ```
//!
//! and DIF runs the same 4-point combine on the raw inputs, then rotates `out_b`, `out_c` and
//! `out_d` by `w1`, `w2` and `w3`. Butterfly `0` has all three twiddles equal to `1` and skips the
//! multiplications.
use num_complex::Complex64;

use crate::parallel::for_each_group;
use crate::twiddles::{quarter_turn, TwiddleTable};

/// One decimation-in-time stage over chunks of `4·quarter` samples.
pub fn radix4_dit_stage(
    data: &mut [Complex64],
    twiddles: &TwiddleTable,
    quarter: usize,
    multithreaded: bool,
) {
    let chunk_size = quarter << 2;
    let stride = twiddles.fft_len() / chunk_size;
    for_each_group::<_, _, 4>(data, chunk_size, multithreaded, |lanes, start| {
        radix4_dit_butterflies(lanes, start, twiddles, stride)
    });
}

/// One decimation-in-frequency stage over chunks of `4·quarter` samples.
pub fn radix4_dif_stage(
    data: &mut [Complex64],
    twiddles: &TwiddleTable,
    quarter: usize,
    multithreaded: bool,
) {
    let chunk_size = quarter << 2;
    let stride = twiddles.fft_len() / chunk_size;
    for_each_group::<_, _, 4>(data, chunk_size, multithreaded, |lanes, start| {
        radix4_dif_butterflies(lanes, start, twiddles, stride)
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
fn radix4_dit_butterflies(
    lanes: [&mut [Complex64]; 4],
    start: usize,
    twiddles: &TwiddleTable,
    stride: usize,
) {
    let direction = twiddles.direction();
    let [s0, s1, s2, s3] = lanes;

    s0.iter_mut()
        .zip(s1.iter_mut())
        .zip(s2.iter_mut())
        .zip(s3.iter_mut())
        .zip(start..)
        .for_each(|((((z0, z1), z2), z3), k)| {
            let a = *z0;
            let (b, c, d) = if k == 0 {
                (*z1, *z2, *z3)
            } else {
                (
                    *z1 * twiddles.get(k * stride),
                    *z2 * twiddles.get(2 * k * stride),
                    *z3 * twiddles.get(3 * k * stride),
                )
            };

            let e = a + c;
            let f = a - c;
            let g = b + d;
            let h = quarter_turn(b - d, direction);

            *z0 = e + g;
            *z1 = f + h;
            *z2 = e - g;
            *z3 = f - h;
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
fn radix4_dif_butterflies(
    lanes: [&mut [Complex64]; 4],
    start: usize,
    twiddles: &TwiddleTable,
    stride: usize,
) {
    let direction = twiddles.direction();
    let [s0, s1, s2, s3] = lanes;

    s0.iter_mut()
        .zip(s1.iter_mut())
        .zip(s2.iter_mut())
        .zip(s3.iter_mut())
        .zip(start..)
        .for_each(|((((z0, z1), z2), z3), k)| {
            let (a, b, c, d) = (*z0, *z1, *z2, *z3);

            let e = a + c;
            let f = a - c;
            let g = b + d;
            let h = quarter_turn(b - d, direction);

            *z0 = e + g;
            if k == 0 {
                *z1 = f + h;
                *z2 = e - g;
                *z3 = f - h;
            } else {
                *z1 = (f + h) * twiddles.get(k * stride);
                *z2 = (e - g) * twiddles.get(2 * k * stride);
                *z3 = (f - h) * twiddles.get(3 * k * stride);
            }
        });
}
