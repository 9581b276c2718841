//! Per-passenger runtime state.
//!
//! SoA arrays owned by one [`BoardingSim`][crate::BoardingSim] invocation;
//! never shared across replications.  The generated attributes stay in
//! `PaxStore` — everything here is derived or mutated by the tick loop.

use bsim_core::Tick;

/// The passenger state machine.
///
/// `Waiting → Walking → Stowing (if carry-on) → Sliding → Seated`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PaxPhase {
    /// At the gate (or not yet arrived, for late passengers).
    Waiting,
    /// In the aisle, advancing toward the assigned row.
    Walking,
    /// Stowing a bag at the assigned row; occupies the aisle segment.
    Stowing,
    /// Sliding into the seat; occupies the aisle segment.
    Sliding,
    /// Terminal.
    Seated,
}

/// Mutable per-passenger run state, indexed by `PaxId`.
pub(crate) struct BoardState {
    pub phase: Vec<PaxPhase>,
    /// Aisle segment currently occupied.  Meaningless while `Waiting` or
    /// `Seated`.
    pub aisle_row: Vec<u16>,
    /// Tick at which the current action completes (walk step lands, stow
    /// or slide finishes).
    pub next_tick: Vec<Tick>,
    /// Tick the passenger reached `Seated`.
    pub seated_tick: Vec<Tick>,
}

impl BoardState {
    pub fn new(count: usize) -> Self {
        Self {
            phase:       vec![PaxPhase::Waiting; count],
            aisle_row:   vec![0; count],
            next_tick:   vec![Tick::ZERO; count],
            seated_tick: vec![Tick::ZERO; count],
        }
    }
}
