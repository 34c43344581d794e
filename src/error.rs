//! Error type shared by every fallible entry point of the crate.
//!
//! All validation runs before a buffer is touched, so an `Err` always means the caller's data is
//! exactly as it was passed in.
use thiserror::Error;

/// Errors reported by the transforms, planners and derived operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FftError {
    /// The length is not an exact power of the requested radix.
    #[error("length {len} is not a power of radix {radix}")]
    InvalidLength { len: usize, radix: usize },
    /// A buffer does not match the length a planner or permutation table was built for.
    #[error("length {actual} does not match the planned length {expected}")]
    LengthMismatch { expected: usize, actual: usize },
    /// An option value that does not name any known mode.
    #[error("unsupported {kind}: {value:?}")]
    UnsupportedMode { kind: &'static str, value: String },
    /// Operands whose shapes cannot be combined.
    #[error("dimension mismatch: {detail}")]
    DimensionMismatch { detail: &'static str },
    /// Frequency helpers need a finite, positive sample spacing.
    #[error("sample spacing must be finite and greater than zero")]
    InvalidSampleSpacing,
}

impl FftError {
    pub(crate) fn unsupported(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnsupportedMode {
            kind,
            value: value.into(),
        }
    }
}
