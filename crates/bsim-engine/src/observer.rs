//! Boarding observer trait for progress reporting and data collection.

use bsim_core::{PaxId, Tick};

/// Callbacks invoked by [`BoardingSim::run`][crate::BoardingSim::run] at
/// key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait BoardObserver {
    /// Called at the end of each tick with the cumulative seated count and
    /// the current total gate-queue length.
    fn on_tick_end(&mut self, _tick: Tick, _seated: usize, _queue_len: usize) {}

    /// Called once per passenger, on the tick they reach `Seated`.
    fn on_pax_seated(&mut self, _pax: PaxId, _tick: Tick) {}

    /// Called once after the final passenger is seated.
    fn on_board_end(&mut self, _final_tick: Tick) {}
}

/// A [`BoardObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl BoardObserver for NoopObserver {}
