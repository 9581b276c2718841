//! Simulation time model.
//!
//! # Design
//!
//! Time advances in fixed steps of `time_step` seconds (from the request's
//! controls section).  The canonical time unit is an integer `Tick` counter;
//! seconds are derived as `tick * step_secs`.  Keeping the counter integral
//! means all eligibility comparisons inside the boarding loop are exact —
//! two runs with the same passenger sequence can never diverge through
//! floating-point drift.
//!
//! Per-passenger durations (walk, stow, slide) are converted to whole ticks
//! once, with `ceil` and a one-tick floor, before the loop starts.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64`: at the default 0.5 s step a boarding run spans a few
/// thousand ticks, so overflow is never a concern.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

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

// ── StepClock ─────────────────────────────────────────────────────────────────

/// Converts between tick counts and simulated seconds for one boarding run.
///
/// `StepClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
pub struct StepClock {
    /// How many simulated seconds one tick represents.
    pub step_secs: f64,
    /// The current tick — advanced by [`StepClock::advance`] each iteration.
    pub current: Tick,
}

impl StepClock {
    /// Create a clock with the given step size, positioned at tick 0.
    pub fn new(step_secs: f64) -> Self {
        Self { step_secs, current: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current = Tick(self.current.0 + 1);
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.secs_at(self.current)
    }

    /// Simulated seconds corresponding to an arbitrary tick.
    #[inline]
    pub fn secs_at(&self, tick: Tick) -> f64 {
        tick.0 as f64 * self.step_secs
    }

    // ── Tick-count helpers ────────────────────────────────────────────────

    /// Ticks needed to span `secs` seconds of activity (rounds up, minimum
    /// one tick so every phase of the state machine is observable).
    #[inline]
    pub fn duration_ticks(&self, secs: f64) -> u64 {
        ((secs / self.step_secs).ceil() as u64).max(1)
    }

    /// First tick at which an offset of `secs` seconds has elapsed (rounds
    /// up, zero stays zero — punctual passengers are present from tick 0).
    #[inline]
    pub fn offset_ticks(&self, secs: f64) -> u64 {
        (secs / self.step_secs).ceil() as u64
    }
}

impl fmt::Display for StepClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.1}s)", self.current, self.elapsed_secs())
    }
}
