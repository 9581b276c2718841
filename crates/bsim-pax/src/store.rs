//! Structure-of-Arrays passenger storage.
//!
//! Every `Vec` field has exactly `count` elements; the `PaxId` value is the
//! index into all of them:
//!
//! ```ignore
//! let seat = store.seat[pax.index()];  // O(1), cache-friendly
//! ```
//!
//! The store holds only *generated* attributes.  Mutable run state (aisle
//! position, phase, timestamps) lives inside the engine, which lets one
//! generated population back both the strategy run and the baseline run.

use bsim_core::{PaxId, SeatId};

/// Structure-of-Arrays storage for one generated passenger population.
#[derive(Clone, Default)]
pub struct PaxStore {
    /// Number of passengers.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Assigned seat.
    pub seat: Vec<SeatId>,

    /// `true` if the passenger boards with a carry-on bag.
    pub carry_on: Vec<bool>,

    /// Seconds to advance one aisle row (row pitch / sampled walking speed).
    pub walk_secs_per_row: Vec<f64>,

    /// Sampled overhead-bin stow time in seconds.  0 without a carry-on.
    pub stow_secs: Vec<f64>,

    /// Sampled seat-slide time in seconds.
    pub slide_secs: Vec<f64>,

    /// `true` if the passenger missed their nominal group call.
    pub late: Vec<bool>,

    /// Seconds after boarding start at which the passenger reaches the
    /// gate queue.  0 for punctual passengers.
    pub arrival_offset_secs: Vec<f64>,

    /// Boarding-queue rank (0 = first invited).  Written by
    /// [`assign_ranks`][crate::assign_ranks]; re-written when the same
    /// population is re-ordered under the baseline policy.
    pub rank: Vec<u32>,
}

impl PaxStore {
    /// Allocate a store for `count` passengers with sentinel/zero values.
    /// The generator fills in actual attributes by indexed writes.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            seat:                vec![SeatId::INVALID; count],
            carry_on:            vec![false; count],
            walk_secs_per_row:   vec![0.0; count],
            stow_secs:           vec![0.0; count],
            slide_secs:          vec![0.0; count],
            late:                vec![false; count],
            arrival_offset_secs: vec![0.0; count],
            rank:                vec![u32::MAX; count],
        }
    }

    /// `true` if there are no passengers (a valid zero-load population).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `PaxId`s in ascending index order.
    pub fn pax_ids(&self) -> impl Iterator<Item = PaxId> + '_ {
        (0..self.count as u32).map(PaxId)
    }
}
