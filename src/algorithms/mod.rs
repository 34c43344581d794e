//! FFT Algorithm Implementations
//!
//! This module contains the orchestration of the butterfly stages and the digit-reversal
//! permutation that goes with them.
//!
//! ## Available Algorithms
//!
//! - **DIT (Decimation-in-Time)**: The default algorithm. The input is digit-reversed first, then
//!   butterflies grow from the smallest span to the largest. Output is in natural order.
//!
//! - **DIF (Decimation-in-Frequency)**: Processes butterflies from the largest span to the
//!   smallest on natural-order input, then digit-reverses the output.
//!
//! Both orderings compute the same transform for the same radix and direction.

pub mod dif;
pub mod digit_reversal;
pub mod dit;
