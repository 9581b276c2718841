//! Boarding-order policies.
//!
//! Each policy is one arm of a single exhaustive match producing a
//! permutation of the population — every passenger appears exactly once.
//! Zone policies sort on (zone, seat depth descending, generation index):
//! calling window seats before aisle seats within the active zone keeps
//! seat shuffles from serializing the zone, and the explicit generation
//! index as the final key makes ordering deterministic for a given
//! population regardless of sort stability.

use std::cmp::Reverse;

use bsim_cabin::CabinLayout;
use bsim_core::{BoardingMethod, PaxId, SimRng};

use crate::store::PaxStore;

/// Rows per boarding zone for `back_to_front` / `front_to_back`.
pub const ZONE_ROWS: u16 = 10;

/// Row blocks for `by_group`.
pub const GROUP_COUNT: u16 = 4;

/// Produce the boarding queue for `store` under `method`.
///
/// Only `Random` consumes the replication RNG; the other policies are pure
/// functions of the population.
pub fn boarding_order(
    store:  &PaxStore,
    layout: &CabinLayout,
    method: BoardingMethod,
    rng:    &mut SimRng,
) -> Vec<PaxId> {
    let mut order: Vec<PaxId> = store.pax_ids().collect();
    let row_of = |p: PaxId| layout.seat(store.seat[p.index()]).row;
    let depth_of = |p: PaxId| layout.seat(store.seat[p.index()]).depth;

    match method {
        BoardingMethod::BackToFront => {
            order.sort_by_key(|&p| (Reverse(row_of(p) / ZONE_ROWS), Reverse(depth_of(p)), p.0));
        }
        BoardingMethod::FrontToBack => {
            order.sort_by_key(|&p| (row_of(p) / ZONE_ROWS, Reverse(depth_of(p)), p.0));
        }
        BoardingMethod::OutsideIn => {
            order.sort_by_key(|&p| (Reverse(depth_of(p)), p.0));
        }
        BoardingMethod::ByGroup => {
            let group_rows = layout.num_rows.div_ceil(GROUP_COUNT).max(1);
            order.sort_by_key(|&p| (Reverse(row_of(p) / group_rows), Reverse(depth_of(p)), p.0));
        }
        BoardingMethod::Random => {
            rng.shuffle(&mut order);
        }
    }

    order
}

/// Assign boarding ranks in `store` per `method`.
///
/// Calling this again with a different method re-ranks the same population
/// in place — the baseline comparison path.
pub fn assign_ranks(
    store:  &mut PaxStore,
    layout: &CabinLayout,
    method: BoardingMethod,
    rng:    &mut SimRng,
) {
    let order = boarding_order(store, layout, method, rng);
    for (pos, pax) in order.into_iter().enumerate() {
        store.rank[pax.index()] = pos as u32;
    }
}
