//! `bsim-pax` — passenger population generation for the bsim boarding
//! simulator.
//!
//! A population is generated once per replication: seat occupancy is drawn
//! from the load factor, behavioral times are sampled per passenger, and a
//! boarding rank is assigned by the configured policy.  The store is
//! read-only to the engine, so the *same* population can be re-ranked and
//! re-run under the baseline policy — exactly what the baseline comparison
//! needs to isolate the effect of ordering.

pub mod generator;
pub mod order;
pub mod sample;
pub mod store;


pub use generator::{LATE_DELAY_SECS, ROW_PITCH_M, generate};
pub use order::{assign_ranks, boarding_order};
pub use store::PaxStore;
