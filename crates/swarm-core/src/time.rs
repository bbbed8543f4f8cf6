//! Simulation time model.
//!
//! # Design
//!
//! Simulated time is a monotonically increasing `Tick` counter.  One tick
//! is one simulation step; the mapping to wall-clock time is owned by the
//! frame scheduler, which advances the simulation at a fixed `FrameRate`
//! regardless of how often the host calls back.
//!
//! Using an integer tick as the canonical unit keeps snapshots comparable
//! across runs: tick 120 is tick 120 whether the host refreshed at 60 Hz or
//! 144 Hz.

use std::fmt;
use std::time::Duration;

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.  Resets to zero whenever the swarm
/// is re-initialised.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick after `self`.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── FrameRate ─────────────────────────────────────────────────────────────────

/// Target simulation rate in steps per second.
///
/// Always finite and strictly positive once constructed.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct FrameRate(f64);

impl FrameRate {
    /// Build a rate, rejecting zero, negative, and non-finite values, and
    /// rates so low that one interval does not fit in a `Duration`.
    pub fn new(steps_per_second: f64) -> CoreResult<Self> {
        if !steps_per_second.is_finite() || steps_per_second <= 0.0 {
            return Err(CoreError::Config(format!(
                "frame rate must be positive, got {steps_per_second}"
            )));
        }
        if Duration::try_from_secs_f64(1.0 / steps_per_second).is_err() {
            return Err(CoreError::Config(format!(
                "frame rate {steps_per_second} gives an unrepresentable step interval"
            )));
        }
        Ok(Self(steps_per_second))
    }

    #[inline]
    pub fn steps_per_second(self) -> f64 {
        self.0
    }

    /// Minimum host time between two consecutive steps.
    #[inline]
    pub fn interval(self) -> Duration {
        Duration::try_from_secs_f64(1.0 / self.0).unwrap_or(Duration::MAX)
    }
}

impl Default for FrameRate {
    /// 30 steps per second.
    fn default() -> Self {
        Self(30.0)
    }
}

impl TryFrom<f64> for FrameRate {
    type Error = CoreError;
    fn try_from(value: f64) -> CoreResult<Self> {
        Self::new(value)
    }
}

impl From<FrameRate> for f64 {
    fn from(rate: FrameRate) -> f64 {
        rate.0
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} steps/s", self.0)
    }
}
