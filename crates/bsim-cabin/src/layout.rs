//! Cabin layout representation and builder.
//!
//! # Data layout
//!
//! Seats live in one flat `Vec<Seat>` indexed by `SeatId`, with
//! `SeatId = row * seats_per_row + col`.  Rows are numbered from the cabin
//! entrance: a passenger bound for row `r` walks `r + 1` aisle segments
//! (segment `r` is the one alongside row `r`).
//!
//! # Aisle topology
//!
//! Single-aisle cabins split each row into a left and right block around
//! aisle 0.  Twin-aisle cabins split each row into three blocks
//! (outer-left / middle / outer-right) with `outer = seats_per_row / 3`;
//! each seat is served by its nearest aisle, the middle block splitting in
//! half toward each side.  This reproduces the common narrow/wide-body
//! column arrangements (6 → 3-3, 8 → 2-4-2, 9 → 3-3-3, 10 → 3-4-3).

use bsim_core::{AircraftConfig, BsimError, BsimResult, SeatId};

// ── Seat ─────────────────────────────────────────────────────────────────────

/// One physical seat, with its precomputed aisle relationship.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Seat {
    /// Row index from the cabin entrance (0-based).
    pub row: u16,
    /// Column index across the row, left to right (0-based).
    pub col: u8,
    /// Which aisle serves this seat (always 0 in single-aisle cabins).
    pub aisle: u8,
    /// `true` if the seat sits to the left of its serving aisle.
    pub left_of_aisle: bool,
    /// Seats between this one and the serving aisle (0 = aisle seat,
    /// 1 = middle, 2 = window in a 3-abreast block).
    pub depth: u8,
}

// ── CabinLayout ───────────────────────────────────────────────────────────────

/// Immutable cabin geometry derived from an [`AircraftConfig`].
///
/// All fields are `pub` for direct indexed access on hot paths.  Construct
/// via [`CabinLayout::build`]; the builder is the only place geometry is
/// checked, so a constructed layout is always internally consistent.
pub struct CabinLayout {
    pub num_rows: u16,
    pub seats_per_row: u8,
    pub num_aisles: u8,
    /// Seat table, indexed by `SeatId`.
    pub seats: Vec<Seat>,
}

impl CabinLayout {
    /// Derive the full seat table from aircraft geometry.
    ///
    /// Fails with `InvalidConfiguration` when a dimension is non-positive,
    /// the aisle count is outside `{1, 2}`, or a twin-aisle cabin is too
    /// narrow to place two aisles.
    pub fn build(cfg: &AircraftConfig) -> BsimResult<Self> {
        if cfg.num_rows == 0 {
            return Err(BsimError::InvalidConfiguration("num_rows must be positive".into()));
        }
        if cfg.seats_per_row == 0 {
            return Err(BsimError::InvalidConfiguration("seats_per_row must be positive".into()));
        }
        match cfg.num_aisles {
            1 => {}
            2 if cfg.seats_per_row >= 3 => {}
            2 => {
                return Err(BsimError::InvalidConfiguration(
                    "a twin-aisle cabin needs at least 3 seats per row".into(),
                ));
            }
            n => {
                return Err(BsimError::InvalidConfiguration(format!(
                    "num_aisles must be 1 or 2, got {n}"
                )));
            }
        }

        let spr = cfg.seats_per_row;
        let mut seats = Vec::with_capacity(cfg.num_rows as usize * spr as usize);
        for row in 0..cfg.num_rows {
            for col in 0..spr {
                let (aisle, left_of_aisle, depth) = seat_position(cfg.num_aisles, spr, col);
                seats.push(Seat { row, col, aisle, left_of_aisle, depth });
            }
        }

        Ok(Self {
            num_rows: cfg.num_rows,
            seats_per_row: spr,
            num_aisles: cfg.num_aisles,
            seats,
        })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    /// Iterator over all `SeatId`s in ascending index order.
    pub fn seat_ids(&self) -> impl Iterator<Item = SeatId> + '_ {
        (0..self.seats.len() as u32).map(SeatId)
    }

    // ── Seat access ───────────────────────────────────────────────────────

    #[inline]
    pub fn seat(&self, id: SeatId) -> &Seat {
        &self.seats[id.index()]
    }

    /// `SeatId` of the seat at (`row`, `col`).
    #[inline]
    pub fn seat_id(&self, row: u16, col: u8) -> SeatId {
        SeatId(row as u32 * self.seats_per_row as u32 + col as u32)
    }

    /// Seats a passenger bound for `target` must squeeze past: same row,
    /// same aisle side, strictly closer to the aisle.  Ordered aisle-out.
    pub fn seats_between_aisle(&self, target: SeatId) -> Vec<SeatId> {
        let t = self.seat(target);
        let row_base = t.row as u32 * self.seats_per_row as u32;
        (0..self.seats_per_row)
            .map(|col| SeatId(row_base + col as u32))
            .filter(|&id| {
                let s = self.seat(id);
                s.aisle == t.aisle && s.left_of_aisle == t.left_of_aisle && s.depth < t.depth
            })
            .collect()
    }
}

// ── Column geometry ──────────────────────────────────────────────────────────

/// Compute (serving aisle, side, depth) for a column.
///
/// Single aisle: blocks of `ceil(spr/2)` / `floor(spr/2)` around aisle 0.
/// Twin aisle: outer blocks of `spr / 3` columns; the middle block splits
/// in half, left half toward aisle 0, right half toward aisle 1.
fn seat_position(num_aisles: u8, spr: u8, col: u8) -> (u8, bool, u8) {
    if num_aisles == 1 {
        let left = spr.div_ceil(2);
        if col < left {
            (0, true, left - 1 - col)
        } else {
            (0, false, col - left)
        }
    } else {
        let outer = (spr / 3).max(1);
        let middle = spr - 2 * outer;
        if col < outer {
            // outer-left block, left of aisle 0
            (0, true, outer - 1 - col)
        } else if col < outer + middle {
            let mid_col = col - outer;
            let mid_left = middle.div_ceil(2);
            if mid_col < mid_left {
                // middle block, right of aisle 0
                (0, false, mid_col)
            } else {
                // middle block, left of aisle 1
                (1, true, middle - 1 - mid_col)
            }
        } else {
            // outer-right block, right of aisle 1
            (1, false, col - outer - middle)
        }
    }
}
