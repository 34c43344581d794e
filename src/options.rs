//! Options to tune how a transform is executed and scaled.
//!
//! Calling the transform routines without specifying options selects reasonable defaults
//! depending on the input size. The enums in this module are closed: string forms coming from a
//! host environment are parsed once at the boundary and anything unrecognised is rejected with
//! [`FftError::UnsupportedMode`].
use std::str::FromStr;

use crate::error::FftError;
use crate::planner::Direction;

/// Inputs at least this long are worth spreading a stage's butterfly groups across threads.
#[cfg(feature = "parallel")]
const MULTITHREADED_THRESHOLD: usize = 1 << 16;

/// Options controlling scaling and execution strategy.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Where the `1/N` (or `1/√N`) factor is applied.
    pub normalization: Normalization,
    /// Process the independent butterfly groups of a stage on the rayon pool.
    ///
    /// Only has an effect when the `parallel` feature is enabled.
    pub multithreaded: bool,
}

impl Options {
    /// Pick options for an input of `input_size` samples.
    pub fn guess_options(input_size: usize) -> Options {
        #[cfg(feature = "parallel")]
        let multithreaded = input_size >= MULTITHREADED_THRESHOLD;
        #[cfg(not(feature = "parallel"))]
        let multithreaded = {
            let _ = input_size;
            false
        };

        Options {
            normalization: Normalization::default(),
            multithreaded,
        }
    }

    #[must_use]
    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    #[must_use]
    pub fn with_multithreaded(mut self, multithreaded: bool) -> Self {
        self.multithreaded = multithreaded;
        self
    }
}

/// FFT normalization modes, following the NumPy/SciPy conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Normalization {
    /// No scaling on the forward transform, `1/N` on the inverse.
    #[default]
    Backward,
    /// `1/N` on the forward transform, no scaling on the inverse.
    Forward,
    /// `1/√N` in both directions.
    Ortho,
}

impl Normalization {
    /// The factor a transform of `len` samples in `direction` is multiplied by, or `None` if the
    /// output is left unscaled.
    pub fn factor(self, direction: Direction, len: usize) -> Option<f64> {
        let n = len as f64;
        match (self, direction) {
            (Normalization::Backward, Direction::Forward)
            | (Normalization::Forward, Direction::Inverse) => None,
            (Normalization::Backward, Direction::Inverse)
            | (Normalization::Forward, Direction::Forward) => Some(n.recip()),
            (Normalization::Ortho, _) => Some(n.sqrt().recip()),
        }
    }
}

impl FromStr for Normalization {
    type Err = FftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "backward" => Ok(Normalization::Backward),
            "forward" => Ok(Normalization::Forward),
            "ortho" => Ok(Normalization::Ortho),
            _ => Err(FftError::unsupported("normalization", s)),
        }
    }
}

/// Which ordering of the Cooley-Tukey recursion to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Decimation in time: digit-reverse the input, then grow the butterflies.
    #[default]
    Dit,
    /// Decimation in frequency: shrink the butterflies, then digit-reverse the output.
    Dif,
}

impl FromStr for Variant {
    type Err = FftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dit" => Ok(Variant::Dit),
            "dif" => Ok(Variant::Dif),
            _ => Err(FftError::unsupported("variant", s)),
        }
    }
}
