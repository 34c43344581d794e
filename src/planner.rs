//! The planner module provides a convenient interface for planning and executing a Fast Fourier
//! Transform. A [`Planner`] pre-computes everything that depends only on the length, radix and
//! direction of a transform: the twiddle factors and the digit-reversal table. Planners are
//! immutable once built, so a [`PlanCache`] can hand the same planner to any number of callers.
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use log::{debug, trace};

use crate::algorithms::digit_reversal::DigitReversal;
use crate::error::FftError;
use crate::twiddles::TwiddleTable;

/// Forward is for running the regular FFT.
/// Inverse is for running the Inverse Fast Fourier Transform (IFFT).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Twiddle factors `exp(-2πi·m/N)`
    Forward,
    /// Twiddle factors `exp(+2πi·m/N)`
    Inverse,
}

impl Direction {
    /// Sign of the twiddle exponent.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Inverse => 1.0,
        }
    }
}

impl FromStr for Direction {
    type Err = FftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "forward" => Ok(Direction::Forward),
            "inverse" => Ok(Direction::Inverse),
            _ => Err(FftError::unsupported("direction", s)),
        }
    }
}

/// Fan-in of one butterfly stage.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Radix {
    Two,
    Four,
}

impl Radix {
    pub fn value(self) -> usize {
        match self {
            Radix::Two => 2,
            Radix::Four => 4,
        }
    }

    /// Number of bits in one base-`radix` digit.
    pub fn digit_bits(self) -> u32 {
        match self {
            Radix::Two => 1,
            Radix::Four => 2,
        }
    }

    /// `k` such that `len == radix^k`, or `None` if there is no such `k`.
    pub fn stages(self, len: usize) -> Option<usize> {
        if !len.is_power_of_two() {
            return None;
        }
        let bits = len.trailing_zeros();
        (bits % self.digit_bits() == 0).then(|| (bits / self.digit_bits()) as usize)
    }
}

impl TryFrom<usize> for Radix {
    type Error = FftError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Radix::Two),
            4 => Ok(Radix::Four),
            _ => Err(FftError::unsupported("radix", value.to_string())),
        }
    }
}

/// Pre-computed tables for a transform of a fixed length, radix and direction.
#[derive(Debug)]
pub struct Planner {
    twiddles: TwiddleTable,
    reversal: DigitReversal,
    stages: usize,
}

impl Planner {
    /// Create a `Planner` for an FFT of size `num_points`.
    ///
    /// The twiddle factors are pre-computed based on the provided [`Direction`].
    ///
    /// # Errors
    ///
    /// Returns [`FftError::InvalidLength`] if `num_points` is not a power of `radix`.
    pub fn new(num_points: usize, radix: Radix, direction: Direction) -> Result<Self, FftError> {
        let stages = radix.stages(num_points).ok_or(FftError::InvalidLength {
            len: num_points,
            radix: radix.value(),
        })?;
        let twiddles = TwiddleTable::new(num_points, radix, direction)?;
        let reversal = DigitReversal::new(num_points, radix)?;

        debug!(
            "planned {direction:?} radix-{} transform of {num_points} points ({stages} stages)",
            radix.value()
        );

        Ok(Self {
            twiddles,
            reversal,
            stages,
        })
    }

    pub fn len(&self) -> usize {
        self.twiddles.fft_len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn radix(&self) -> Radix {
        self.twiddles.radix()
    }

    pub fn direction(&self) -> Direction {
        self.twiddles.direction()
    }

    /// `log_radix(N)`, the number of butterfly stages.
    pub fn stages(&self) -> usize {
        self.stages
    }

    pub fn twiddles(&self) -> &TwiddleTable {
        &self.twiddles
    }

    pub fn reversal(&self) -> &DigitReversal {
        &self.reversal
    }
}

/// Key under which a [`PlanCache`] stores planners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlanKey {
    pub len: usize,
    pub radix: Radix,
    pub direction: Direction,
}

/// Keyed store of shared, read-only planners.
///
/// The cache is an ordinary value: whoever owns it decides its lifetime, and dropping it drops
/// every planner that is not still held by a caller.
#[derive(Debug, Default)]
pub struct PlanCache {
    plans: Mutex<HashMap<PlanKey, Arc<Planner>>>,
}

impl PlanCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the planner for `(len, radix, direction)`, building it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::InvalidLength`] if `len` is not a power of `radix`. Nothing is cached
    /// in that case.
    pub fn get_or_plan(
        &self,
        len: usize,
        radix: Radix,
        direction: Direction,
    ) -> Result<Arc<Planner>, FftError> {
        let key = PlanKey {
            len,
            radix,
            direction,
        };

        if let Some(planner) = self.lock().get(&key) {
            trace!("plan cache hit for {key:?}");
            return Ok(Arc::clone(planner));
        }

        // Build outside the lock; a concurrent builder of the same key just loses the race.
        let planner = Arc::new(Planner::new(len, radix, direction)?);
        let mut plans = self.lock();
        Ok(Arc::clone(plans.entry(key).or_insert(planner)))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<PlanKey, Arc<Planner>>> {
        // Planners are inserted fully built, so a poisoned map is still consistent.
        self.plans
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
