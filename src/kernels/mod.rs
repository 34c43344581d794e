//! FFT Butterfly Kernels
//!
//! Each kernel executes exactly one stage of the Cooley-Tukey recursion, in place, over the whole
//! buffer. The butterflies of one stage are independent and may run concurrently, but a stage
//! must be finished before the next one starts reading.
//!
//! Every butterfly reads all of its inputs into locals before writing any output, so no output
//! of a butterfly can observe another output of the same butterfly.
//!
//! ## Organization
//!
//! - `radix2`: two-point butterflies for the DIT and DIF orderings
//! - `radix4`: four-point butterflies for the DIT and DIF orderings

pub mod radix2;
pub mod radix4;
