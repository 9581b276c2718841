//! Aisle occupancy and overhead-bin state.
//!
//! Both are indexed arenas (flat `Vec`s keyed by aisle/row), not occupancy
//! graphs: the exclusion check the tick loop performs is a single indexed
//! load.

use bsim_core::PaxId;

/// Stow time multiplier when a row's bins are already full — the passenger
/// hunts nearby bins for space before sitting down.
pub const BIN_FULL_PENALTY: f64 = 2.0;

// ── AisleGrid ─────────────────────────────────────────────────────────────────

/// Exclusive aisle-segment occupancy: one slot per (aisle, row) segment.
///
/// Segment `r` of an aisle is the stretch alongside row `r`.  At most one
/// passenger occupies a segment at a time; twin-aisle cabins contend per
/// aisle, never across aisles.
pub struct AisleGrid {
    num_rows: usize,
    slots: Vec<Option<PaxId>>,
}

impl AisleGrid {
    pub fn new(num_aisles: u8, num_rows: u16) -> Self {
        Self {
            num_rows: num_rows as usize,
            slots: vec![None; num_aisles as usize * num_rows as usize],
        }
    }

    #[inline]
    fn slot(&self, aisle: u8, row: u16) -> usize {
        aisle as usize * self.num_rows + row as usize
    }

    #[inline]
    pub fn is_free(&self, aisle: u8, row: u16) -> bool {
        self.slots[self.slot(aisle, row)].is_none()
    }

    /// Claim a segment.
    ///
    /// # Panics
    /// Panics in debug builds if the segment is already occupied — the tick
    /// loop must check [`is_free`][Self::is_free] first.
    #[inline]
    pub fn occupy(&mut self, aisle: u8, row: u16, pax: PaxId) {
        let slot = self.slot(aisle, row);
        debug_assert!(self.slots[slot].is_none(), "segment ({aisle},{row}) double-occupied");
        self.slots[slot] = Some(pax);
    }

    #[inline]
    pub fn release(&mut self, aisle: u8, row: u16) {
        let slot = self.slot(aisle, row);
        self.slots[slot] = None;
    }
}

// ── BinState ──────────────────────────────────────────────────────────────────

/// Overhead-bin usage per row.
///
/// Capacity is uniform across rows (the request's `bin_capacity_per_row`);
/// usage accumulates as bags are stowed.
pub struct BinState {
    capacity_per_row: u32,
    used: Vec<u32>,
}

impl BinState {
    pub fn new(num_rows: u16, capacity_per_row: u32) -> Self {
        Self {
            capacity_per_row,
            used: vec![0; num_rows as usize],
        }
    }

    /// Try to stow one bag at `row`.  Returns `true` (and consumes one
    /// slot) if the row's bins have space; `false` means the stow incurs
    /// the [`BIN_FULL_PENALTY`].
    pub fn try_stow(&mut self, row: u16) -> bool {
        let used = &mut self.used[row as usize];
        if *used < self.capacity_per_row {
            *used += 1;
            true
        } else {
            false
        }
    }

    /// Bags stowed at `row` so far.
    #[inline]
    pub fn used(&self, row: u16) -> u32 {
        self.used[row as usize]
    }
}
