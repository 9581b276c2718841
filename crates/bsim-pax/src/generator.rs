//! Passenger population generator.
//!
//! One call per replication.  Population-wide draws (which seats are
//! occupied) come from the replication's `SimRng`; per-passenger draws come
//! from a `PaxRng` seeded by (population seed, `PaxId`), so a passenger's
//! attributes are independent of how many other passengers exist.

use bsim_cabin::CabinLayout;
use bsim_core::{BagConfig, BehaviorConfig, BoardingMethod, LoadConfig, PaxId, PaxRng, SimRng};

use crate::order::assign_ranks;
use crate::sample::truncated_normal;
use crate::store::PaxStore;

/// Seat-row pitch in metres; converts walking speed (m/s) into per-row
/// walk time.
pub const ROW_PITCH_M: f64 = 0.8;

/// Late passengers reach the gate a uniform draw from this range (seconds)
/// after boarding starts.
pub const LATE_DELAY_SECS: (f64, f64) = (60.0, 600.0);

/// Generate a ranked passenger population for one replication.
///
/// - Occupied seats: a uniform shuffle of all seats, truncated to
///   `load_factor` of the seat count (rounded to nearest).
/// - Carry-on possession and lateness: Bernoulli draws.
/// - Behavioral times: truncated normal around the configured means
///   (see [`crate::sample`]).
/// - Boarding rank: assigned by `method` (see [`crate::order`]).
pub fn generate(
    layout:   &CabinLayout,
    load:     &LoadConfig,
    bags:     &BagConfig,
    behavior: &BehaviorConfig,
    method:   BoardingMethod,
    rng:      &mut SimRng,
) -> PaxStore {
    // ── Seat occupancy ────────────────────────────────────────────────────
    let mut seats: Vec<_> = layout.seat_ids().collect();
    rng.shuffle(&mut seats);
    let pax_count = (load.load_factor * seats.len() as f64).round() as usize;
    seats.truncate(pax_count);

    // ── Per-passenger attributes ──────────────────────────────────────────
    let pop_seed: u64 = rng.random();
    let mut store = PaxStore::new(pax_count);
    for (i, &seat) in seats.iter().enumerate() {
        let pax = PaxId(i as u32);
        let mut prng = PaxRng::new(pop_seed, pax);

        let carry_on = prng.gen_bool(bags.carry_on_rate);
        let speed = truncated_normal(&mut prng, behavior.walking_speed_mean);
        let stow = if carry_on {
            truncated_normal(&mut prng, behavior.stow_time_carry_on_mean)
        } else {
            0.0
        };
        let slide = truncated_normal(&mut prng, behavior.seat_slide_time_mean);
        let late = prng.gen_bool(behavior.late_pax_rate);
        let offset = if late {
            prng.gen_range(LATE_DELAY_SECS.0..LATE_DELAY_SECS.1)
        } else {
            0.0
        };

        store.seat[i] = seat;
        store.carry_on[i] = carry_on;
        store.walk_secs_per_row[i] = ROW_PITCH_M / speed;
        store.stow_secs[i] = stow;
        store.slide_secs[i] = slide;
        store.late[i] = late;
        store.arrival_offset_secs[i] = offset;
    }

    // ── Boarding order ────────────────────────────────────────────────────
    assign_ranks(&mut store, layout, method, rng);

    store
}
