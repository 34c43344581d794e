//! Digit-reversal permutation for radix-2 and radix-4 transforms.
//!
//! Bit reversal reorders `x[i]` to `x[rev(i)]` where `rev` reverses the binary digits of `i`.
//! Radix-4 algorithms need the same thing with base-4 digits. Both are handled here with a
//! square-root sized seed table: for `N = r^k`, let `h = k / 2` and `S = r^h`. Every index
//! splits into a low part `lo < S`, a high part `hi < S` and, when `k` is odd, a single middle
//! digit `mid < r` that reversal leaves in place:
//!
//! ```text
//! index = hi·(r·S) + mid·S + lo   (k odd)
//! index = hi·S + lo               (k even)
//! ```
//!
//! The seed table holds `rev_h(x)` pre-multiplied by the weight of the high part, so the
//! reversed partner of `lo + mid·S + seed[hi']` is simply `hi' + mid·S + seed[lo]`. Visiting
//! each unordered pair `(i, j)` with `i < j` exactly once swaps every transposition once.
//! Pairs with `i == j` are the fixed points of the permutation and are skipped.
use crate::error::FftError;
use crate::planner::Radix;

/// The digit-reversal permutation for one `(N, radix)` pair.
///
/// The permutation is an involution: applying it twice restores the original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitReversal {
    len: usize,
    radix: Radix,
    /// `rev_h(x) * scale` for `x < S`
    seed: Vec<usize>,
    /// `r` when the digit count is odd, otherwise `1`
    planes: usize,
    /// weight of the high part, `S * planes`
    scale: usize,
}

impl DigitReversal {
    /// Build the seed table for sequences of `len` samples.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::InvalidLength`] if `len` is not a power of `radix`.
    pub fn new(len: usize, radix: Radix) -> Result<Self, FftError> {
        let digits = radix.stages(len).ok_or(FftError::InvalidLength {
            len,
            radix: radix.value(),
        })?;

        let r = radix.value();
        let half = digits / 2;
        let seed_len = r.pow(half as u32);
        let planes = if digits % 2 == 1 { r } else { 1 };
        let scale = seed_len * planes;

        let mut seed = vec![0; seed_len];
        if half > 0 {
            // A lone digit j reverses to j·r^(h-1)
            let top = scale * (seed_len / r);
            for (j, slot) in seed.iter_mut().enumerate().take(r).skip(1) {
                *slot = j * top;
            }
            // rev(r·i + j) = rev(i) / r + rev(j)
            for x in r..seed_len {
                seed[x] = seed[x / r] / r + seed[x % r];
            }
        }

        Ok(Self {
            len,
            radix,
            seed,
            planes,
            scale,
        })
    }

    /// Length of the sequences this permutation applies to.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    /// The index `i` is moved to.
    pub fn reversed_index(&self, i: usize) -> usize {
        debug_assert!(i < self.len);
        let seed_len = self.seed.len();
        let lo = i % seed_len;
        let mid = (i / seed_len) % self.planes;
        let hi = i / self.scale;
        self.seed[lo] + mid * seed_len + self.seed[hi] / self.scale
    }

    /// Reorder `buf` between natural and digit-reversed order, in place.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::LengthMismatch`] if `buf` does not have the length the table was built
    /// for. `buf` is left untouched in that case.
    pub fn apply<T>(&self, buf: &mut [T]) -> Result<(), FftError> {
        if buf.len() != self.len {
            return Err(FftError::LengthMismatch {
                expected: self.len,
                actual: buf.len(),
            });
        }

        let seed_len = self.seed.len();
        for i in 0..seed_len {
            let rev_i = self.seed[i];
            for j in (i + 1)..seed_len {
                let rev_j = self.seed[j];
                for plane in 0..self.planes {
                    let offset = plane * seed_len;
                    buf.swap(i + offset + rev_j, j + offset + rev_i);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reverse the base-`radix` digits of `i` by peeling them off one at a time.
    fn naive_reverse(mut i: usize, radix: usize, digits: usize) -> usize {
        let mut rev = 0;
        for _ in 0..digits {
            rev = rev * radix + i % radix;
            i /= radix;
        }
        rev
    }

    /// Top down bit reverse interleaving, only used to cross-check the radix-2 permutation.
    fn top_down_bit_reverse_permutation<T: Copy>(x: &[T]) -> Vec<T> {
        if x.len() == 1 {
            return x.to_vec();
        }
        let evens: Vec<T> = x.iter().step_by(2).copied().collect();
        let odds: Vec<T> = x.iter().skip(1).step_by(2).copied().collect();

        let mut y = top_down_bit_reverse_permutation(&evens);
        y.extend(top_down_bit_reverse_permutation(&odds));
        y
    }

    fn cases() -> Vec<(Radix, usize)> {
        let radix_2 = (0..=12).map(|k| (Radix::Two, k));
        let radix_4 = (0..=6).map(|k| (Radix::Four, k));
        radix_2.chain(radix_4).collect()
    }

    #[test]
    fn matches_naive_digit_reversal() {
        for (radix, k) in cases() {
            let r = radix.value();
            let n = r.pow(k as u32);
            let perm = DigitReversal::new(n, radix).unwrap();

            let mut buf: Vec<usize> = (0..n).collect();
            perm.apply(&mut buf).unwrap();

            for (i, &v) in buf.iter().enumerate() {
                assert_eq!(v, naive_reverse(i, r, k), "radix {r}, N = {n}, index {i}");
                assert_eq!(perm.reversed_index(i), v);
            }
        }
    }

    #[test]
    fn radix_2_matches_top_down_interleaving() {
        for k in 0..=12 {
            let n = 1 << k;
            let perm = DigitReversal::new(n, Radix::Two).unwrap();
            let mut buf: Vec<usize> = (0..n).collect();
            perm.apply(&mut buf).unwrap();

            let x: Vec<usize> = (0..n).collect();
            assert_eq!(buf, top_down_bit_reverse_permutation(&x));
        }
    }

    #[test]
    fn applying_twice_is_identity() {
        for (radix, k) in cases() {
            let n = radix.value().pow(k as u32);
            let perm = DigitReversal::new(n, radix).unwrap();

            let original: Vec<f64> = (0..n).map(|i| i as f64 * 0.5 - 3.0).collect();
            let mut buf = original.clone();
            perm.apply(&mut buf).unwrap();
            perm.apply(&mut buf).unwrap();
            assert_eq!(buf, original);
        }
    }

    #[test]
    fn small_base_4_orders() {
        let perm = DigitReversal::new(16, Radix::Four).unwrap();
        let mut buf: Vec<usize> = (0..16).collect();
        perm.apply(&mut buf).unwrap();
        assert_eq!(buf, vec![0, 4, 8, 12, 1, 5, 9, 13, 2, 6, 10, 14, 3, 7, 11, 15]);

        // odd digit count: the middle digit stays put
        let perm = DigitReversal::new(64, Radix::Four).unwrap();
        assert_eq!(perm.reversed_index(1), 16);
        assert_eq!(perm.reversed_index(4), 4);
        assert_eq!(perm.reversed_index(6), 36);
        assert_eq!(perm.reversed_index(27), 57);
        assert_eq!(perm.reversed_index(21), 21);
    }

    #[test]
    fn wrong_length_leaves_buffer_untouched() {
        let perm = DigitReversal::new(16, Radix::Two).unwrap();
        let mut buf: Vec<usize> = (0..8).collect();
        assert_eq!(
            perm.apply(&mut buf),
            Err(FftError::LengthMismatch {
                expected: 16,
                actual: 8
            })
        );
        assert_eq!(buf, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn rejects_lengths_that_are_not_powers_of_the_radix() {
        assert!(DigitReversal::new(0, Radix::Two).is_err());
        assert!(DigitReversal::new(32, Radix::Four).is_err());
        assert!(DigitReversal::new(6, Radix::Two).is_err());
    }
}
